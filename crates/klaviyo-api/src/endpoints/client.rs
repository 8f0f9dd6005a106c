//! Public-key endpoints under `/client/*`. All are unauthenticated
//! POSTs keyed by the `company_id` query parameter (added by
//! `.public()`), for use from untrusted contexts.

use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::post("create_client_subscription", "/client/subscriptions")
            .describe("Subscribe a profile to email/SMS marketing from an untrusted context.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post("create_client_push_token", "/client/push-tokens")
            .describe("Register a device push token against a profile.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post("unregister_client_push_token", "/client/push-token-unregister")
            .describe("Unregister a device push token.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post("create_client_event", "/client/events")
            .describe("Record an event for a profile from an untrusted context.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post("bulk_create_client_events", "/client/event-bulk-create")
            .describe("Record multiple events for one profile in a single call.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post("create_client_profile", "/client/profiles")
            .describe("Create or update a profile from an untrusted context.")
            .public()
            .data()
            .build(),
        EndpointDescriptor::post(
            "create_client_back_in_stock_subscription",
            "/client/back-in-stock-subscriptions",
        )
        .describe("Subscribe to back-in-stock notifications from an untrusted context.")
        .public()
        .data()
        .build(),
    ]
}
