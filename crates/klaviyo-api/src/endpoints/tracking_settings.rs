use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_tracking_settings", "/api/tracking-settings")
            .describe("List UTM tracking settings for the account.")
            .query_as("fields_tracking_setting", "fields[tracking-setting]")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .build(),
        EndpointDescriptor::get("get_tracking_setting", "/api/tracking-settings/{id}")
            .describe("Get a tracking setting by id.")
            .path("id")
            .query_as("fields_tracking_setting", "fields[tracking-setting]")
            .build(),
        EndpointDescriptor::patch("update_tracking_setting", "/api/tracking-settings/{id}")
            .describe("Update the account's UTM tracking parameters.")
            .path("id")
            .data()
            .build(),
    ]
}
