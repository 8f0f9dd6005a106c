use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_events", "/api/events")
            .describe("List events, most recent last; filter and sort by datetime.")
            .query_as("fields_event", "fields[event]")
            .query_as("fields_metric", "fields[metric]")
            .query_as("fields_profile", "fields[profile]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_event", "/api/events")
            .describe("Record an event for a profile; idempotent via attributes.unique_id.")
            .data()
            .build(),
        EndpointDescriptor::get("get_event", "/api/events/{id}")
            .describe("Get an event by id.")
            .path("id")
            .query_as("fields_event", "fields[event]")
            .query_as("fields_metric", "fields[metric]")
            .query_as("fields_profile", "fields[profile]")
            .query("include")
            .build(),
        EndpointDescriptor::post("bulk_create_events", "/api/event-bulk-create-jobs")
            .describe("Record events for multiple profiles in one async job.")
            .data()
            .build(),
        EndpointDescriptor::get("get_metric_for_event", "/api/events/{id}/metric")
            .describe("Get the metric an event was recorded against.")
            .path("id")
            .query_as("fields_metric", "fields[metric]")
            .build(),
        EndpointDescriptor::get(
            "get_metric_id_for_event",
            "/api/events/{id}/relationships/metric",
        )
        .describe("Get the metric id of an event.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_profile_for_event", "/api/events/{id}/profile")
            .describe("Get the profile an event belongs to.")
            .path("id")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .query_as("fields_profile", "fields[profile]")
            .build(),
        EndpointDescriptor::get(
            "get_profile_id_for_event",
            "/api/events/{id}/relationships/profile",
        )
        .describe("Get the profile id of an event.")
        .path("id")
        .build(),
    ]
}
