use anyhow::bail;

use crate::controllers::paste;
use crate::paste_id::PasteId;
use crate::App;

/// Look up one paste and print the result as JSON.
pub async fn run(app: App, target: &str) -> anyhow::Result<()> {
    let id = PasteId::from_request(Some(target), None)?;
    let result = paste::fetch(&app.upstream, &id).await;

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_success() {
        bail!("failed to fetch paste '{id}'");
    }

    Ok(())
}
