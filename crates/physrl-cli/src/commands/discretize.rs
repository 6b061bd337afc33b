//! Discretize command

use anyhow::Result;
use clap::Args;
use physrl_client::DiscretizeClient;
use tracing::info;

use crate::form::StateForm;
use crate::render;

#[derive(Args, Debug)]
pub struct DiscretizeArgs {
    #[command(flatten)]
    pub form: StateForm,

    /// Send the state as query parameters (GET) instead of a JSON body
    #[arg(long)]
    pub get: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

pub async fn run(client: &DiscretizeClient, args: &DiscretizeArgs) -> Result<()> {
    let request = args.form.to_request();
    info!("Discretizing {:?} with {:?} bins...", request.state.as_array(), request.n_bins);

    let response = if args.get {
        client.discretize_query(&request.to_query()).await?
    } else {
        client.discretize(&request).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render::render_result(&response));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(get: bool) -> DiscretizeArgs {
        DiscretizeArgs {
            form: StateForm {
                position: "0".to_string(),
                velocity: "0".to_string(),
                angle: "0".to_string(),
                angular_velocity: "0".to_string(),
                bins: "20".to_string(),
            },
            get,
            json: false,
        }
    }

    #[test]
    fn test_unreachable_backend_surfaces_error() {
        // Nothing listens on port 1
        let client = DiscretizeClient::new("http://127.0.0.1:1");

        for get in [false, true] {
            let result = tokio_test::block_on(run(&client, &args(get)));
            let err = result.unwrap_err();
            assert!(err.to_string().starts_with("Failed to send request"));
        }
    }
}
