//! Registration form demo binary.
//!
//! Drives the form the way a view layer would: derive props, fire the
//! interaction callbacks, re-derive props after every dispatch. The
//! submission call is mocked; swap in [`regform::HttpSubmitClient`] to post
//! to a real endpoint.

use regform::{
    RegFormCallbacks, RegFormEnvironment, RegFormProps, RegFormReducer, RegFormState,
    derive_props, mocks::MockSubmitClient,
};
use regform_core::environment::SystemClock;
use regform_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(props: &RegFormProps) {
    if let Some(error) = &props.error {
        println!("  !! {error}");
    }
    println!(
        "  first: {:?}  last: {:?}  password: {:?}  confirm: {:?}",
        props.first_name, props.last_name, props.password, props.confirm_password
    );
    println!(
        "  [Register] {}",
        if props.submit_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regform=debug,regform_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Registration Form: Unidirectional Data Flow ===\n");

    let client = MockSubmitClient::succeeding();
    let env = RegFormEnvironment::new(SystemClock, client.clone());
    let store = Store::new(RegFormState::default(), RegFormReducer::new(), env);
    let callbacks = RegFormCallbacks::new(store.clone(), client);

    let props = derive_props(&store.state(Clone::clone).await);
    println!("Initial form:");
    render(&props);

    // Submitting the empty form fails validation before any call is made.
    println!("\n>>> Submit (empty form)");
    callbacks.on_submit(&props).await;
    let props = derive_props(&store.state(Clone::clone).await);
    render(&props);

    // Editing the first name clears the first-name error.
    println!("\n>>> Type first name: Amy");
    callbacks.on_first_name_change("Amy").await;
    let props = derive_props(&store.state(Clone::clone).await);
    render(&props);

    // Fill in the rest of the form.
    println!("\n>>> Fill the remaining fields");
    callbacks.on_last_name_change("Pond").await;
    callbacks.on_password_change("longenough1").await;
    callbacks.on_confirm_password_change("longenough1").await;
    let props = derive_props(&store.state(Clone::clone).await);
    render(&props);

    // A valid submission goes out to the client and re-enables the form.
    println!("\n>>> Submit (valid form)");
    callbacks.on_submit(&props).await;
    let props = derive_props(&store.state(Clone::clone).await);
    render(&props);

    println!("\n=== Done ===");
    println!("\nKey concepts demonstrated:");
    println!("  • State: RegFormState, replaced only through the reducer");
    println!("  • Action: RegFormAction, user intent + submission lifecycle");
    println!("  • Reducer: pure function (state, action) → state");
    println!("  • Workflow: submit() orchestrates validation and the external call");
    println!("  • Binder: derive_props / callbacks are the whole view interface");
}
