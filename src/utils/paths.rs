//! 跨平台路径处理工具 (传统原则：常识性接口设计)

use crate::error::{RepokitError, Result};
use std::path::{Path, PathBuf};

/// 环境文件的约定扩展名
pub const ENV_EXTENSION: &str = "env";

/// 获取用户配置目录：~/.repokit
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        RepokitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot determine home directory",
        ))
    })?;

    Ok(home.join(".repokit"))
}

/// 设置文件路径：~/.repokit/config.toml
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 是否带有 .env 扩展名
///
/// `.env` 本身没有扩展名（`Path::extension` 视其为隐藏文件名），需单独判断。
pub fn has_env_extension(path: &Path) -> bool {
    let is_dotenv = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n == ".env");
    is_dotenv
        || path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ENV_EXTENSION))
}

/// 读取文件内容，返回错误时提供详细信息
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RepokitError::PathNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| {
        RepokitError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {}", path.display(), e),
        ))
    })
}

/// 确保目录存在，否则返回 `PathNotFound`
pub fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(RepokitError::PathNotFound(path.to_path_buf()))
    }
}

/// 列出直接子目录，按名称排序
pub fn list_subdirectories(root: &Path) -> Result<Vec<PathBuf>> {
    require_dir(root)?;

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// 子目录名称（非 UTF-8 名称会被有损转换）
pub fn subdirectory_names(root: &Path) -> Result<Vec<String>> {
    Ok(list_subdirectories(root)?
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_has_env_extension() {
        assert!(has_env_extension(Path::new(".env")));
        assert!(has_env_extension(Path::new("/project/.env")));
        assert!(has_env_extension(Path::new("dev.env")));
        assert!(has_env_extension(Path::new("config/prod.ENV")));
        assert!(!has_env_extension(Path::new("settings.txt")));
        assert!(!has_env_extension(Path::new(".env.local")));
        assert!(!has_env_extension(Path::new("env")));
    }

    #[test]
    fn test_list_subdirectories_skips_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();

        let names = subdirectory_names(dir.path()).unwrap();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_missing_root_is_path_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = list_subdirectories(&missing).unwrap_err();
        assert!(matches!(err, RepokitError::PathNotFound(p) if p == missing));
    }

    #[test]
    fn test_read_file_missing() {
        let err = read_file(Path::new("/definitely/not/here.env")).unwrap_err();
        assert!(matches!(err, RepokitError::PathNotFound(_)));
    }
}
