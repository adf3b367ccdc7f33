//! Customer secrets commands

use log::{debug, warn};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{SecretsApi, SiteApi};
use crate::error::{Error, Result};
use crate::models::SecretTable;
use crate::output::Formattable;

/// Warning logged when a site has no secrets
pub const NO_SECRETS_MESSAGE: &str = "You have no Customer Secrets.";

/// Run the customer-secrets:list command
pub async fn list(opts: &GlobalOptions, site_id: &str, debug: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let table = list_secrets(&ctx.client, &ctx.client, site_id, debug).await?;
    table.print(ctx.format)?;

    Ok(())
}

/// Resolve `site_id`, fetch its secrets and label them for display.
///
/// The site must resolve before the secrets API is called. `site_id` and
/// `debug` reach the secrets API exactly as given. An empty result logs a
/// single warning and still yields a table with both field labels.
pub async fn list_secrets<S, A>(
    sites: &S,
    secrets_api: &A,
    site_id: &str,
    debug: bool,
) -> Result<SecretTable>
where
    S: SiteApi + ?Sized,
    A: SecretsApi + ?Sized,
{
    if site_id.trim().is_empty() {
        return Err(Error::Other("Site ID must not be empty".to_string()));
    }

    let site = sites.resolve_site(site_id).await?;
    debug!("Resolved site {} ({})", site.name, site.id);

    let table = SecretTable::new(secrets_api.list_secrets(site_id, debug).await?);
    debug!("Fetched {} secrets for {}", table.len(), site_id);

    if table.is_empty() {
        warn!("{}", NO_SECRETS_MESSAGE);
    }

    Ok(table)
}
