use orders::executable_utils::initialize_executable;
use orders::schema::create_schema;
use orders::storage::connect;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = initialize_executable()?;

    let db = connect(&config.common.database_url, &config.store).await?;
    if let Err(e) = create_schema(&db).await {
        tracing::error!(error = %e, "Failed to create order schema");
        return Err(e.into());
    }

    tracing::info!(project = %config.common.project_name, "Order schema created");
    Ok(())
}
