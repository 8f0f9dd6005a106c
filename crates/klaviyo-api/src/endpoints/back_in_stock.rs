use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![EndpointDescriptor::post(
        "create_back_in_stock_subscription",
        "/api/back-in-stock-subscriptions",
    )
    .describe("Subscribe a profile to back-in-stock notifications for a catalog variant.")
    .data()
    .build()]
}
