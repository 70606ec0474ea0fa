use common::types::{Product, User};
use entity_store::startup;
use serde::Serialize;
use service::{in_memory_fn_repository, InMemoryRepository, Repository, UserPatch};
use tracing::{error, info};

fn print<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{label}: {json}"),
        Err(e) => error!(event = "encode_failed", %label, error = %e, "cannot print value"),
    }
}

/// Walk one store pair through the demo scenario; failures are logged, never fatal.
fn run_demo<U, P>(form: &str, mut users: U, mut products: P)
where
    U: Repository<User>,
    P: Repository<Product>,
{
    info!(event = "demo_start", form, "running repository demo");

    users.create(User { id: "1".into(), name: "Putri".into() });
    users.create(User { id: "2".into(), name: "Anggit".into() });
    print("Users", &users.find_all());

    let product = products.create(Product { id: "1".into(), name: "Soto".into(), price: 1000 });
    print("Product", &product);

    match users.update("2", UserPatch { name: Some("Anggit S.".into()) }) {
        Ok(updated) => print("Updated", &updated),
        Err(e) => {
            error!(event = "update_failed", form, code = e.code(), error = %e, "update failed")
        }
    }

    if let Err(e) = users.update("99", UserPatch { name: Some("Nobody".into()) }) {
        error!(event = "update_failed", form, code = e.code(), error = %e, "update failed");
    }

    print("Removed 1", &users.remove("1"));
    print("Removed 1 again", &users.remove("1"));
    print("Users", &users.find_all());
}

fn main() {
    let ctx = startup::bootstrap("repository");

    run_demo("owned", InMemoryRepository::<User>::new(), InMemoryRepository::<Product>::new());
    run_demo("closure", in_memory_fn_repository::<User>(), in_memory_fn_repository::<Product>());

    ctx.log_stop();
}
