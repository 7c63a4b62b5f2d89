//! Prepare an exported dashboard for creation in another account.
//!
//! The copy loses its guid, and every NRQL query in a widget's
//! `rawConfiguration.nrqlQueries` that targets the source account is pointed
//! at the target account instead. Queries against any other account are left
//! alone, as is any part of the tree that does not have the expected shape.

use nerdgraph_client::{DashboardEntity, Widget};
use nerdgraph_config::AccountId;
use serde_json::Value;

/// Return a creation-ready copy of `entity`; the input is not modified.
pub fn prepare_for_import(
    entity: &DashboardEntity,
    source_account_id: AccountId,
    target_account_id: AccountId,
) -> DashboardEntity {
    let mut copy = entity.clone();
    copy.guid = None;

    let widgets = copy
        .pages
        .iter_mut()
        .flatten()
        .flat_map(|page| page.widgets.iter_mut().flatten());

    for widget in widgets {
        rewrite_widget(widget, source_account_id, target_account_id);
    }

    copy
}

fn rewrite_widget(widget: &mut Widget, source: AccountId, target: AccountId) {
    let Some(queries) = widget
        .raw_configuration
        .as_mut()
        .and_then(|config| config.get_mut("nrqlQueries"))
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for query in queries {
        let Some(account_id) = query.get_mut("accountId") else {
            continue;
        };
        if account_id.as_u64() == Some(source.get()) {
            *account_id = Value::from(target.get());
        }
    }
}
