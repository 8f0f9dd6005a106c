//! The endpoint descriptor table, one module per resource family.
//! Each module returns its descriptors in catalog order; the registry
//! concatenates them. Wire names are spelled exactly as Klaviyo
//! expects them, brackets included.

use klaviyo_client::EndpointDescriptor;

pub mod accounts;
pub mod back_in_stock;
pub mod campaigns;
pub mod catalogs;
pub mod client;
pub mod coupons;
pub mod data_privacy;
pub mod events;
pub mod flows;
pub mod forms;
pub mod images;
pub mod lists;
pub mod metrics;
pub mod profiles;
pub mod reports;
pub mod reviews;
pub mod segments;
pub mod tags;
pub mod templates;
pub mod tracking_settings;
pub mod webhooks;

/// Every descriptor the server exposes, in catalog order.
pub fn all() -> Vec<EndpointDescriptor> {
    let mut table = Vec::new();
    table.extend(accounts::descriptors());
    table.extend(campaigns::descriptors());
    table.extend(catalogs::descriptors());
    table.extend(back_in_stock::descriptors());
    table.extend(coupons::descriptors());
    table.extend(client::descriptors());
    table.extend(data_privacy::descriptors());
    table.extend(events::descriptors());
    table.extend(flows::descriptors());
    table.extend(forms::descriptors());
    table.extend(images::descriptors());
    table.extend(lists::descriptors());
    table.extend(segments::descriptors());
    table.extend(metrics::descriptors());
    table.extend(profiles::descriptors());
    table.extend(reports::descriptors());
    table.extend(reviews::descriptors());
    table.extend(tags::descriptors());
    table.extend(templates::descriptors());
    table.extend(tracking_settings::descriptors());
    table.extend(webhooks::descriptors());
    table
}
