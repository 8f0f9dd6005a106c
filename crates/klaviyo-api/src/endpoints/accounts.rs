use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_accounts", "/api/accounts")
            .describe("List the accounts the API token has access to.")
            .query_as("fields_account", "fields[account]")
            .build(),
        EndpointDescriptor::get("get_account", "/api/accounts/{id}")
            .describe("Get a single account by id.")
            .path("id")
            .query_as("fields_account", "fields[account]")
            .build(),
    ]
}
