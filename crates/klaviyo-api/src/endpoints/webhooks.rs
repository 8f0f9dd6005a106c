use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_webhooks", "/api/webhooks")
            .describe("List the account's webhooks.")
            .query_as("fields_webhook", "fields[webhook]")
            .query("include")
            .build(),
        EndpointDescriptor::post("create_webhook", "/api/webhooks")
            .describe("Create a webhook subscribed to one or more topics.")
            .data()
            .build(),
        EndpointDescriptor::get("get_webhook", "/api/webhooks/{id}")
            .describe("Get a webhook by id.")
            .path("id")
            .query_as("fields_webhook", "fields[webhook]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_webhook", "/api/webhooks/{id}")
            .describe("Update a webhook's endpoint, secret key or topics.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_webhook", "/api/webhooks/{id}")
            .describe("Delete a webhook.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_webhook_topics", "/api/webhook-topics")
            .describe("List the webhook topics available for subscription.")
            .build(),
        EndpointDescriptor::get("get_webhook_topic", "/api/webhook-topics/{id}")
            .describe("Get a webhook topic by id.")
            .path("id")
            .build(),
    ]
}
