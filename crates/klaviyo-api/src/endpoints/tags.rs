use klaviyo_client::EndpointDescriptor;

// Each taggable resource gets an id-listing plus tag/untag relationship
// mutations; untag is a DELETE carrying the linkage document in its body.
fn taggable(
    ids_op: &'static str,
    tag_op: &'static str,
    untag_op: &'static str,
    path: &'static str,
    ids_desc: &'static str,
    tag_desc: &'static str,
    untag_desc: &'static str,
) -> [EndpointDescriptor; 3] {
    [
        EndpointDescriptor::get(ids_op, path)
            .describe(ids_desc)
            .path("id")
            .build(),
        EndpointDescriptor::post(tag_op, path)
            .describe(tag_desc)
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete(untag_op, path)
            .describe(untag_desc)
            .path("id")
            .data()
            .build(),
    ]
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    let mut out = vec![
        EndpointDescriptor::get("get_tags", "/api/tags")
            .describe("List tags in the account.")
            .query_as("fields_tag_group", "fields[tag-group]")
            .query_as("fields_tag", "fields[tag]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_tag", "/api/tags")
            .describe("Create a tag, optionally inside a tag group.")
            .data()
            .build(),
        EndpointDescriptor::get("get_tag", "/api/tags/{id}")
            .describe("Get a tag by id.")
            .path("id")
            .query_as("fields_tag_group", "fields[tag-group]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_tag", "/api/tags/{id}")
            .describe("Rename a tag.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_tag", "/api/tags/{id}")
            .describe("Delete a tag; it is removed from everything it was applied to.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_tag_groups", "/api/tag-groups")
            .describe("List tag groups in the account.")
            .query_as("fields_tag_group", "fields[tag-group]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_tag_group", "/api/tag-groups")
            .describe("Create a tag group.")
            .data()
            .build(),
        EndpointDescriptor::get("get_tag_group", "/api/tag-groups/{id}")
            .describe("Get a tag group by id.")
            .path("id")
            .query_as("fields_tag_group", "fields[tag-group]")
            .build(),
        EndpointDescriptor::patch("update_tag_group", "/api/tag-groups/{id}")
            .describe("Update a tag group's name or return-fields behavior.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_tag_group", "/api/tag-groups/{id}")
            .describe(
                "Delete a tag group; its tags move to the account's default group. \
                 The default group itself cannot be deleted.",
            )
            .path("id")
            .build(),
        EndpointDescriptor::get("get_tag_group_for_tag", "/api/tags/{id}/tag-group")
            .describe("Get the tag group a tag belongs to.")
            .path("id")
            .query_as("fields_tag_group", "fields[tag-group]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_group_id_for_tag",
            "/api/tags/{id}/relationships/tag-group",
        )
        .describe("Get the id of the tag group a tag belongs to.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_tags_for_tag_group", "/api/tag-groups/{id}/tags")
            .describe("List the tags inside a tag group.")
            .path("id")
            .query_as("fields_tag", "fields[tag]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_ids_for_tag_group",
            "/api/tag-groups/{id}/relationships/tags",
        )
        .describe("List the ids of tags inside a tag group.")
        .path("id")
        .build(),
    ];

    out.extend(taggable(
        "get_flow_ids_for_tag",
        "tag_flows",
        "remove_tag_from_flows",
        "/api/tags/{id}/relationships/flows",
        "List the ids of flows a tag is applied to.",
        "Apply a tag to one or more flows.",
        "Remove a tag from one or more flows.",
    ));
    out.extend(taggable(
        "get_campaign_ids_for_tag",
        "tag_campaigns",
        "remove_tag_from_campaigns",
        "/api/tags/{id}/relationships/campaigns",
        "List the ids of campaigns a tag is applied to.",
        "Apply a tag to one or more campaigns.",
        "Remove a tag from one or more campaigns.",
    ));
    out.extend(taggable(
        "get_list_ids_for_tag",
        "tag_lists",
        "remove_tag_from_lists",
        "/api/tags/{id}/relationships/lists",
        "List the ids of lists a tag is applied to.",
        "Apply a tag to one or more lists.",
        "Remove a tag from one or more lists.",
    ));
    out.extend(taggable(
        "get_segment_ids_for_tag",
        "tag_segments",
        "remove_tag_from_segments",
        "/api/tags/{id}/relationships/segments",
        "List the ids of segments a tag is applied to.",
        "Apply a tag to one or more segments.",
        "Remove a tag from one or more segments.",
    ));

    out
}
