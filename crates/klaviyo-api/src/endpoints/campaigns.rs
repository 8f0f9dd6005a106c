use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_campaigns", "/api/campaigns")
            .describe("List campaigns. A filter on messages.channel is required by the platform.")
            .required_query("filter")
            .query_as("fields_campaign_message", "fields[campaign-message]")
            .query_as("fields_campaign", "fields[campaign]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_campaign", "/api/campaigns")
            .describe("Create a campaign from a JSON:API campaign object.")
            .data()
            .build(),
        EndpointDescriptor::get("get_campaign", "/api/campaigns/{id}")
            .describe("Get a campaign by id.")
            .path("id")
            .query_as("fields_campaign_message", "fields[campaign-message]")
            .query_as("fields_campaign", "fields[campaign]")
            .query_as("fields_tag", "fields[tag]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_campaign", "/api/campaigns/{id}")
            .describe("Update a campaign.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_campaign", "/api/campaigns/{id}")
            .describe("Delete a campaign.")
            .path("id")
            .build(),
        EndpointDescriptor::post("create_campaign_clone", "/api/campaign-clone")
            .describe("Clone an existing campaign under a new name.")
            .data()
            .build(),
        EndpointDescriptor::get(
            "get_campaign_recipient_estimation",
            "/api/campaign-recipient-estimations/{id}",
        )
        .describe("Get the estimated recipient count computed by the most recent estimation job.")
        .path("id")
        .query_as(
            "fields_campaign_recipient_estimation",
            "fields[campaign-recipient-estimation]",
        )
        .build(),
        EndpointDescriptor::post(
            "create_campaign_recipient_estimation_job",
            "/api/campaign-recipient-estimation-jobs",
        )
        .describe("Trigger an async refresh of a campaign's recipient estimation.")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_campaign_recipient_estimation_job",
            "/api/campaign-recipient-estimation-jobs/{id}",
        )
        .describe("Poll a recipient estimation job until terminal.")
        .path("id")
        .query_as(
            "fields_campaign_recipient_estimation_job",
            "fields[campaign-recipient-estimation-job]",
        )
        .build(),
        EndpointDescriptor::post("create_campaign_send_job", "/api/campaign-send-jobs")
            .describe("Trigger a campaign to send asynchronously.")
            .data()
            .build(),
        EndpointDescriptor::get("get_campaign_send_job", "/api/campaign-send-jobs/{id}")
            .describe("Poll a campaign send job by id.")
            .path("id")
            .query_as("fields_campaign_send_job", "fields[campaign-send-job]")
            .build(),
        EndpointDescriptor::patch("update_campaign_send_job", "/api/campaign-send-jobs/{id}")
            .describe("Cancel or revert a queued campaign send job.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::get("get_campaign_message", "/api/campaign-messages/{id}")
            .describe("Get a campaign message by id.")
            .path("id")
            .query_as("fields_campaign_message", "fields[campaign-message]")
            .query_as("fields_campaign", "fields[campaign]")
            .query_as("fields_image", "fields[image]")
            .query_as("fields_template", "fields[template]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_campaign_message", "/api/campaign-messages/{id}")
            .describe("Update a campaign message.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::post(
            "assign_template_to_campaign_message",
            "/api/campaign-message-assign-template",
        )
        .describe("Assign a template to a campaign message, cloning the template.")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_campaign_for_campaign_message",
            "/api/campaign-messages/{id}/campaign",
        )
        .describe("Get the parent campaign of a campaign message.")
        .path("id")
        .query_as("fields_campaign", "fields[campaign]")
        .build(),
        EndpointDescriptor::get(
            "get_campaign_id_for_campaign_message",
            "/api/campaign-messages/{id}/relationships/campaign",
        )
        .describe("Get the parent campaign id of a campaign message.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_template_for_campaign_message",
            "/api/campaign-messages/{id}/template",
        )
        .describe("Get the template assigned to a campaign message.")
        .path("id")
        .query_as("fields_template", "fields[template]")
        .build(),
        EndpointDescriptor::get(
            "get_template_id_for_campaign_message",
            "/api/campaign-messages/{id}/relationships/template",
        )
        .describe("Get the assigned template id of a campaign message.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_image_for_campaign_message",
            "/api/campaign-messages/{id}/image",
        )
        .describe("Get the image attached to a campaign message.")
        .path("id")
        .query_as("fields_image", "fields[image]")
        .build(),
        EndpointDescriptor::get(
            "get_image_id_for_campaign_message",
            "/api/campaign-messages/{id}/relationships/image",
        )
        .describe("Get the attached image id of a campaign message.")
        .path("id")
        .build(),
        EndpointDescriptor::patch(
            "update_image_for_campaign_message",
            "/api/campaign-messages/{id}/relationships/image",
        )
        .describe("Swap the image attached to a campaign message.")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_messages_for_campaign",
            "/api/campaigns/{id}/campaign-messages",
        )
        .describe("List the messages of a campaign.")
        .path("id")
        .query_as("fields_campaign_message", "fields[campaign-message]")
        .query_as("fields_campaign", "fields[campaign]")
        .query_as("fields_image", "fields[image]")
        .query_as("fields_template", "fields[template]")
        .query("include")
        .build(),
        EndpointDescriptor::get(
            "get_message_ids_for_campaign",
            "/api/campaigns/{id}/relationships/campaign-messages",
        )
        .describe("List the message ids of a campaign.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_tags_for_campaign", "/api/campaigns/{id}/tags")
            .describe("List the tags applied to a campaign.")
            .path("id")
            .query_as("fields_tag", "fields[tag]")
            .build(),
        EndpointDescriptor::get(
            "get_tag_ids_for_campaign",
            "/api/campaigns/{id}/relationships/tags",
        )
        .describe("List the tag ids applied to a campaign.")
        .path("id")
        .build(),
    ]
}
