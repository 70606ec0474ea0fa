use common::fetch::fetch_todos;
use entity_store::startup;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    let ctx = startup::bootstrap("fetch");

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = ctx.service,
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    let url = ctx.config.fetch.url.clone();
    rt.block_on(async move {
        let client = reqwest::Client::new();
        match fetch_todos(&client, &url).await {
            Ok(todos) => {
                info!(
                    service = "fetch",
                    event = "fetched",
                    %url,
                    count = todos.len(),
                    "todos fetched"
                );
                match serde_json::to_string_pretty(&todos) {
                    Ok(out) => println!("{out}"),
                    Err(e) => error!(
                        service = "fetch",
                        event = "encode_failed",
                        error = %e,
                        "cannot print todos"
                    ),
                }
            }
            // 上游失败只记录，不改变退出码
            Err(e) => {
                error!(service = "fetch", event = "fetch_failed", %url, error = %e, "fetch failed")
            }
        }
    });

    ctx.log_stop();
    std::process::ExitCode::SUCCESS
}
