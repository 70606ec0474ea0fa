use common::types::{sample_string_response, sample_user_response};
use entity_store::startup;

fn main() -> anyhow::Result<()> {
    let ctx = startup::bootstrap("api_response");

    println!("User response: {}", serde_json::to_string_pretty(&sample_user_response())?);
    println!("String response: {}", serde_json::to_string_pretty(&sample_string_response())?);

    ctx.log_stop();
    Ok(())
}
