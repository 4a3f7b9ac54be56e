use crate::core::{parse_obj, MeshData};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(path: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {path}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {path}: HTTP {}", resp.status());
    }
    let text_promise = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("read {path}: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{path}: body is not text"))
}

/// Fetch and parse the OBJ asset. No retry, no timeout.
pub async fn load_obj(path: &str) -> anyhow::Result<Vec<MeshData>> {
    let text = fetch_text(path).await?;
    let meshes = parse_obj(&text)?;
    Ok(meshes)
}
