use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_lists", "/api/lists")
            .describe("List lists.")
            .query_as("fields_list", "fields[list]")
            .query_as("fields_tag", "fields[tag]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_list", "/api/lists")
            .describe("Create a list.")
            .data()
            .build(),
        EndpointDescriptor::get("get_list", "/api/lists/{id}")
            .describe("Get a list by id; additional-fields[list]=profile_count adds the count.")
            .path("id")
            .query_as("additional_fields_list", "additional-fields[list]")
            .query_as("fields_list", "fields[list]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_list", "/api/lists/{id}")
            .describe("Rename a list.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_list", "/api/lists/{id}")
            .describe("Delete a list.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_tags_for_list", "/api/lists/{id}/tags")
            .describe("List the tags applied to a list.")
            .path("id")
            .query_as("fields_tag", "fields[tag]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_ids_for_list",
            "/api/lists/{id}/relationships/tags",
        )
        .describe("List the tag ids applied to a list.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_profiles_for_list", "/api/lists/{id}/profiles")
            .describe("List the profiles in a list. page[size] default 20, max 100 (advisory).")
            .path("id")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .query_as("fields_profile", "fields[profile]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get(
            "get_profile_ids_for_list",
            "/api/lists/{id}/relationships/profiles",
        )
        .describe("List the profile ids in a list. page[size] default 20, max 1000 (advisory).")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::post(
            "add_profiles_to_list",
            "/api/lists/{id}/relationships/profiles",
        )
        .describe("Add profiles to a list (data is an array of profile refs, up to 1000).")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::delete(
            "remove_profiles_from_list",
            "/api/lists/{id}/relationships/profiles",
        )
        .describe("Remove profiles from a list (data is an array of profile refs).")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::get("get_flows_triggered_by_list", "/api/lists/{id}/flow-triggers")
            .describe("List the flows triggered by subscription to this list.")
            .path("id")
            .query_as("fields_flow", "fields[flow]")
            .build(),
        EndpointDescriptor::get(
            "get_ids_for_flows_triggered_by_list",
            "/api/lists/{id}/relationships/flow-triggers",
        )
        .describe("List the ids of flows triggered by this list.")
        .path("id")
        .build(),
    ]
}
