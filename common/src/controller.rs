//! 診断UIコントローラ
//!
//! 選択中の画像と解析フェーズを1つの状態機械として持つ。
//! ブラウザ（fetch）とCLI（reqwest）は `PredictClient` を実装するだけで、
//! 状態遷移はすべてここで決まる。

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::types::DiagnosisResult;

/// 解析フェーズ
///
/// 「結果なし / 結果あり / エラーあり」のどれか1つだけが常に有効。
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Success(DiagnosisResult),
    Failure(String),
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Analyzing)
    }
}

/// 予測サーバーへの送信手段
///
/// 成功時は検証済みの `DiagnosisResult`、失敗時は表示用メッセージを持つ `Error` を返す。
#[allow(async_fn_in_trait)]
pub trait PredictClient<S> {
    async fn predict(&self, selection: &S) -> Result<DiagnosisResult>;
}

/// 1回の解析要求を識別する番号
///
/// 解析中に別の画像が選択されると、その番号の結果は捨てられる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 診断コントローラ
#[derive(Debug, Clone)]
pub struct DiagnosisController<S> {
    selection: Option<S>,
    phase: Phase,
    generation: u64,
    /// 解析中に選択が差し替えられた（結果は捨てるが、応答までは解析中のまま）
    stale: bool,
}

impl<S> Default for DiagnosisController<S> {
    fn default() -> Self {
        Self {
            selection: None,
            phase: Phase::Idle,
            generation: 0,
            stale: false,
        }
    }
}

impl<S> DiagnosisController<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&S> {
        self.selection.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// 解析ボタンを押せるか（選択あり・解析中でない）
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_busy()
    }

    /// 画像を選択する
    ///
    /// `None` は何もしない。選択すると結果とエラーを消して待機状態に戻る。
    /// 解析中に選択した場合は送信中の結果を捨てる印を付け、応答が届くまで
    /// 解析中のままにする（同時に送信する要求は常に1件）。
    /// 差し替えた前の選択を返すので、呼び出し側でプレビューを解放できる。
    pub fn select_file(&mut self, file: Option<S>) -> Option<S> {
        let file = file?;

        if self.is_busy() {
            debug!("selection replaced while analyzing; in-flight result will be discarded");
            self.stale = true;
        } else {
            self.phase = Phase::Idle;
        }

        self.selection.replace(file)
    }

    /// 解析を開始する
    ///
    /// 選択なし、または解析中なら `None`（何もしない）。
    pub fn begin_analysis(&mut self) -> Option<(Ticket, S)>
    where
        S: Clone,
    {
        if self.is_busy() {
            debug!("analysis already in flight; ignoring");
            return None;
        }
        let selection = self.selection.clone()?;

        self.generation += 1;
        self.stale = false;
        self.phase = Phase::Analyzing;
        debug!("analysis started (ticket {})", self.generation);

        Some((Ticket(self.generation), selection))
    }

    /// 要求の結果を反映する
    ///
    /// 現在の解析要求に対応するときだけ適用し、適用したかを返す。
    /// 解析中に選択が差し替えられていれば結果は捨て、待機状態に戻す。
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<DiagnosisResult>) -> bool {
        if !self.is_busy() || ticket.0 != self.generation {
            debug!("ignoring outcome for unknown ticket {}", ticket.0);
            return false;
        }

        if self.stale {
            debug!("discarding stale outcome for ticket {}", ticket.0);
            self.stale = false;
            self.phase = Phase::Idle;
            return false;
        }

        self.phase = match outcome {
            Ok(result) => {
                debug!("analysis succeeded: {} ({})", result.disease, result.status);
                Phase::Success(result)
            }
            Err(err) => {
                warn!("analysis failed: {}", err);
                Phase::Failure(err.to_string())
            }
        };
        true
    }

    /// 選択中の画像を1回だけ送信して結果を反映する
    ///
    /// 開始できなかった場合は `false`（要求は送らない）。
    pub async fn analyze<C>(&mut self, client: &C) -> bool
    where
        C: PredictClient<S>,
        S: Clone,
    {
        let Some((ticket, selection)) = self.begin_analysis() else {
            return false;
        };

        let guard = AnalysisGuard::new(|outcome| {
            self.resolve(ticket, outcome);
        });
        let outcome = client.predict(&selection).await;
        guard.complete(outcome);
        true
    }
}

/// 解析中フラグの解放を保証するガード
///
/// `complete` で結果を渡すか、渡さずに破棄されると `Error::Interrupted` で解放する。
pub struct AnalysisGuard<F>
where
    F: FnOnce(Result<DiagnosisResult>),
{
    release: Option<F>,
}

impl<F> AnalysisGuard<F>
where
    F: FnOnce(Result<DiagnosisResult>),
{
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }

    pub fn complete(mut self, outcome: Result<DiagnosisResult>) {
        if let Some(release) = self.release.take() {
            release(outcome);
        }
    }
}

impl<F> Drop for AnalysisGuard<F>
where
    F: FnOnce(Result<DiagnosisResult>),
{
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(Err(Error::Interrupted));
        }
    }
}
