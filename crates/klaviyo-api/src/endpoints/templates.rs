use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_templates", "/api/templates")
            .describe("List email templates.")
            .query_as("fields_template", "fields[template]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_template", "/api/templates")
            .describe("Create an email template from HTML or template text.")
            .data()
            .build(),
        EndpointDescriptor::get("get_template", "/api/templates/{id}")
            .describe("Get a template by id.")
            .path("id")
            .query_as("fields_template", "fields[template]")
            .build(),
        EndpointDescriptor::patch("update_template", "/api/templates/{id}")
            .describe("Update a template's name or HTML/text content.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_template", "/api/templates/{id}")
            .describe("Delete a template.")
            .path("id")
            .build(),
        EndpointDescriptor::post("render_template", "/api/template-render")
            .describe("Render a template with a context object and return the result.")
            .data()
            .build(),
        EndpointDescriptor::post("clone_template", "/api/template-clone")
            .describe("Clone an existing template under a new name.")
            .data()
            .build(),
        EndpointDescriptor::get(
            "get_all_universal_content",
            "/api/template-universal-content",
        )
        .describe("List universal content blocks.")
        .query_as(
            "fields_template_universal_content",
            "fields[template-universal-content]",
        )
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("sort")
        .build(),
        EndpointDescriptor::post(
            "create_universal_content",
            "/api/template-universal-content",
        )
        .describe("Create a universal content block.")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_universal_content",
            "/api/template-universal-content/{id}",
        )
        .describe("Get a universal content block by id.")
        .path("id")
        .query_as(
            "fields_template_universal_content",
            "fields[template-universal-content]",
        )
        .build(),
        EndpointDescriptor::patch(
            "update_universal_content",
            "/api/template-universal-content/{id}",
        )
        .describe("Update a universal content block.")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::delete(
            "delete_universal_content",
            "/api/template-universal-content/{id}",
        )
        .describe("Delete a universal content block.")
        .path("id")
        .build(),
    ]
}
