mod constants;
mod db;
mod error;
mod handlers;
mod models;
mod server;
mod store;
#[cfg(test)]
mod test_util;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if let Err(err) = server::run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
