use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_reviews", "/api/reviews")
            .describe("List product reviews; filterable by status, rating and item.")
            .query_as("fields_event", "fields[event]")
            .query_as("fields_review", "fields[review]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get("get_review", "/api/reviews/{id}")
            .describe("Get a product review by id.")
            .path("id")
            .query_as("fields_event", "fields[event]")
            .query_as("fields_review", "fields[review]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_review", "/api/reviews/{id}")
            .describe("Update a review's status (publish or reject).")
            .path("id")
            .data()
            .build(),
    ]
}
