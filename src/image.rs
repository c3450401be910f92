//! アップロードする画像ファイルの読み込み

use crate::error::{AgroVisionError, Result};
use std::path::{Path, PathBuf};

/// 拡張子とContent-Typeの対応
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
];

/// 選択された画像（端末版のSelection）
#[derive(Debug, Clone)]
pub struct LocalImage {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// ファイルを読み込む。存在しない・画像でない場合はエラー
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AgroVisionError::FileNotFound(path.display().to_string()));
        }

        let mime_type = mime_type_for(path)
            .ok_or_else(|| AgroVisionError::UnsupportedImage(path.display().to_string()))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let bytes = std::fs::read(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
            bytes,
        })
    }

    /// プレビュー参照（端末ではファイルパス）
    pub fn preview(&self) -> String {
        self.path.display().to_string()
    }
}

/// 拡張子からContent-Typeを推定（大文字小文字は区別しない）
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("leaf.jpg")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("leaf.JPEG")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("leaf.Png")), Some("image/png"));
        assert_eq!(mime_type_for(Path::new("leaf.webp")), Some("image/webp"));
        assert_eq!(mime_type_for(Path::new("notes.txt")), None);
        assert_eq!(mime_type_for(Path::new("no_extension")), None);
    }
}
