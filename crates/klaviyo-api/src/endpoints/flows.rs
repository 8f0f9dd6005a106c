use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_flows", "/api/flows")
            .describe("List flows. page[size] default 50, max 100 (advisory).")
            .query_as("fields_flow_action", "fields[flow-action]")
            .query_as("fields_flow", "fields[flow]")
            .query_as("fields_tag", "fields[tag]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_flow", "/api/flows")
            .describe("Create a flow from a JSON:API flow definition.")
            .data()
            .build(),
        EndpointDescriptor::get("get_flow", "/api/flows/{id}")
            .describe("Get a flow by id.")
            .path("id")
            .query_as("fields_flow_action", "fields[flow-action]")
            .query_as("fields_flow", "fields[flow]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_flow_status", "/api/flows/{id}")
            .describe("Update a flow's status (draft, manual, live).")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_flow", "/api/flows/{id}")
            .describe("Delete a flow.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_flow_action", "/api/flow-actions/{id}")
            .describe("Get a flow action by id.")
            .path("id")
            .query_as("fields_flow_action", "fields[flow-action]")
            .query_as("fields_flow_message", "fields[flow-message]")
            .query_as("fields_flow", "fields[flow]")
            .query("include")
            .build(),
        EndpointDescriptor::get("get_flow_message", "/api/flow-messages/{id}")
            .describe("Get a flow message by id.")
            .path("id")
            .query_as("fields_flow_action", "fields[flow-action]")
            .query_as("fields_flow_message", "fields[flow-message]")
            .query_as("fields_template", "fields[template]")
            .query("include")
            .build(),
        EndpointDescriptor::get("get_actions_for_flow", "/api/flows/{id}/flow-actions")
            .describe("List the actions of a flow.")
            .path("id")
            .query_as("fields_flow_action", "fields[flow-action]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::get(
            "get_action_ids_for_flow",
            "/api/flows/{id}/relationships/flow-actions",
        )
        .describe("List the action ids of a flow.")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::get("get_flow_for_flow_action", "/api/flow-actions/{id}/flow")
            .describe("Get the parent flow of a flow action.")
            .path("id")
            .query_as("fields_flow", "fields[flow]")
            .build(),
        EndpointDescriptor::get(
            "get_flow_id_for_flow_action",
            "/api/flow-actions/{id}/relationships/flow",
        )
        .describe("Get the parent flow id of a flow action.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_messages_for_flow_action",
            "/api/flow-actions/{id}/flow-messages",
        )
        .describe("List the messages of a flow action.")
        .path("id")
        .query_as("fields_flow_message", "fields[flow-message]")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::get(
            "get_message_ids_for_flow_action",
            "/api/flow-actions/{id}/relationships/flow-messages",
        )
        .describe("List the message ids of a flow action.")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::get(
            "get_action_for_flow_message",
            "/api/flow-messages/{id}/flow-action",
        )
        .describe("Get the parent action of a flow message.")
        .path("id")
        .query_as("fields_flow_action", "fields[flow-action]")
        .build(),
        EndpointDescriptor::get(
            "get_action_id_for_flow_message",
            "/api/flow-messages/{id}/relationships/flow-action",
        )
        .describe("Get the parent action id of a flow message.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_template_for_flow_message",
            "/api/flow-messages/{id}/template",
        )
        .describe("Get the template used by a flow message.")
        .path("id")
        .query_as("fields_template", "fields[template]")
        .build(),
        EndpointDescriptor::get(
            "get_template_id_for_flow_message",
            "/api/flow-messages/{id}/relationships/template",
        )
        .describe("Get the template id used by a flow message.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_tags_for_flow", "/api/flows/{id}/tags")
            .describe("List the tags applied to a flow.")
            .path("id")
            .query_as("fields_tag", "fields[tag]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_ids_for_flow",
            "/api/flows/{id}/relationships/tags",
        )
        .describe("List the tag ids applied to a flow.")
        .path("id")
        .build(),
    ]
}
