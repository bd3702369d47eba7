use crate::common::*;

use crate::errors::graph_error::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류

    # Examples
    ```rust
    let config: TotalConfig = read_toml_from_file("config/server_config.toml")?;
    ```
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Writes `bytes` to `output_path`, replacing any existing file.

    The bytes go to a hidden sibling file first which is then renamed over the
    target, so the target either keeps its previous content or holds the
    complete new content.

    # Arguments
    * `output_path` - Destination file
    * `bytes`       - File content

    # Errors
    `GraphError::WriteError` when the temporary file cannot be written or renamed.
"#]
pub async fn write_file_atomic(output_path: &Path, bytes: &[u8]) -> GraphResult<()> {
    let file_name: String = output_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let tmp_path: PathBuf = output_path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(e) = tokio::fs::write(&tmp_path, bytes).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(GraphError::write_error(output_path, e));
    }

    if let Err(e) = tokio::fs::rename(&tmp_path, output_path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(GraphError::write_error(output_path, e));
    }

    Ok(())
}
