//! Resolve one configured dashboard reference to its full entity.
//!
//! A reference with a guid is fetched directly. A name-only reference is
//! first resolved to exactly one guid through entity search in the source
//! account, then fetched. Each remote call is made once; there are no retries.

use nerdgraph_client::endpoints::{get_dashboard_entity, search_dashboard_guids};
use nerdgraph_client::{DashboardEntity, QueryExecutor};
use nerdgraph_config::{AccountId, DashboardReference};

use crate::error::{MigrationError, Result};
use crate::events::{EventSink, MigrationEvent};

/// Fetch the dashboard `reference` points to in `account_id`.
///
/// The guid wins when a reference carries both a guid and a name.
pub async fn resolve<E: QueryExecutor>(
    executor: &E,
    reference: &DashboardReference,
    account_id: AccountId,
    events: &dyn EventSink,
) -> Result<DashboardEntity> {
    let guid = match (&reference.guid, &reference.name) {
        (Some(guid), _) => guid.clone(),
        (None, Some(name)) => resolve_name(executor, name, account_id, events).await?,
        // The loader rejects such entries; an empty name simply matches nothing.
        (None, None) => resolve_name(executor, "", account_id, events).await?,
    };

    fetch_by_guid(executor, &guid, events).await
}

async fn resolve_name<E: QueryExecutor>(
    executor: &E,
    name: &str,
    account_id: AccountId,
    events: &dyn EventSink,
) -> Result<String> {
    events.emit(MigrationEvent::ResolvingName {
        account_id,
        name: name.to_string(),
    });

    let mut guids = search_dashboard_guids(executor, account_id, name).await?;

    match guids.len() {
        0 => Err(MigrationError::NoDashboardNamed {
            account_id,
            name: name.to_string(),
        }),
        1 => {
            let guid = guids.remove(0);
            events.emit(MigrationEvent::NameResolved {
                name: name.to_string(),
                guid: guid.clone(),
            });
            Ok(guid)
        }
        _ => Err(MigrationError::AmbiguousDashboardName {
            account_id,
            name: name.to_string(),
        }),
    }
}

async fn fetch_by_guid<E: QueryExecutor>(
    executor: &E,
    guid: &str,
    events: &dyn EventSink,
) -> Result<DashboardEntity> {
    events.emit(MigrationEvent::FetchingEntity {
        guid: guid.to_string(),
    });

    let mut entity = get_dashboard_entity(executor, guid)
        .await?
        .ok_or_else(|| MigrationError::DashboardNotFound {
            guid: guid.to_string(),
        })?;

    if entity.guid.is_none() {
        entity.guid = Some(guid.to_string());
    }

    events.emit(MigrationEvent::EntityFetched {
        guid: guid.to_string(),
        name: entity.name.clone(),
    });

    Ok(entity)
}
