use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_segments", "/api/segments")
            .describe("List segments.")
            .query_as("fields_segment", "fields[segment]")
            .query_as("fields_tag", "fields[tag]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_segment", "/api/segments")
            .describe("Create a segment from a condition definition.")
            .data()
            .build(),
        EndpointDescriptor::get("get_segment", "/api/segments/{id}")
            .describe("Get a segment by id; additional-fields[segment]=profile_count adds the count.")
            .path("id")
            .query_as("additional_fields_segment", "additional-fields[segment]")
            .query_as("fields_segment", "fields[segment]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_segment", "/api/segments/{id}")
            .describe("Update a segment's name or definition.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_segment", "/api/segments/{id}")
            .describe("Delete a segment.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_tags_for_segment", "/api/segments/{id}/tags")
            .describe("List the tags applied to a segment.")
            .path("id")
            .query_as("fields_tag", "fields[tag]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_ids_for_segment",
            "/api/segments/{id}/relationships/tags",
        )
        .describe("List the tag ids applied to a segment.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_profiles_for_segment", "/api/segments/{id}/profiles")
            .describe("List the profiles in a segment. page[size] default 20, max 100 (advisory).")
            .path("id")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .query_as("fields_profile", "fields[profile]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get(
            "get_profile_ids_for_segment",
            "/api/segments/{id}/relationships/profiles",
        )
        .describe("List the profile ids in a segment. page[size] default 20, max 1000 (advisory).")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::get(
            "get_flows_triggered_by_segment",
            "/api/segments/{id}/flow-triggers",
        )
        .describe("List the flows triggered by joining this segment.")
        .path("id")
        .query_as("fields_flow", "fields[flow]")
        .build(),
        EndpointDescriptor::get(
            "get_ids_for_flows_triggered_by_segment",
            "/api/segments/{id}/relationships/flow-triggers",
        )
        .describe("List the ids of flows triggered by this segment.")
        .path("id")
        .build(),
    ]
}
