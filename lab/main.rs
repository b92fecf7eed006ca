/// neuromat Lab
///
/// Browser front-end for the two-layer forward pass: an input vector is fed
/// through weight matrices W and V, producing NET1 → OUT1 → NET2 → OUT2.
/// Served by a synchronous tiny_http server; no JavaScript frameworks
/// required.
///
/// Run with:
///   cargo run --bin lab
/// Then open http://127.0.0.1:7878 (override with NEUROMAT_ADDR).

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use tiny_http::Server;

use state::LabState;

fn main() {
    env_logger::init();

    let addr = std::env::var("NEUROMAT_ADDR").unwrap_or_else(|_| "127.0.0.1:7878".to_owned());
    let server = match Server::http(&addr) {
        Ok(server) => server,
        Err(err) => {
            log::error!("failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    println!("╔══════════════════════════════════════════════╗");
    println!("║              neuromat Lab                    ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{:<36} ║", addr);
    println!("╚══════════════════════════════════════════════╝");
    log::info!("listening on {}", addr);

    // Handlers are short-lived and never block, so requests are served
    // sequentially and the state needs no locking.
    let mut state = LabState::new();
    for request in server.incoming_requests() {
        routes::dispatch(request, &mut state);
    }
}
