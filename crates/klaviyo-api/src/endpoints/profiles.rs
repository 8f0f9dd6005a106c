use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_profiles", "/api/profiles")
            .describe(
                "List profiles; supports filtering, sorting and cursor pagination \
                 (default page size 20, max 100).",
            )
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .query_as("fields_profile", "fields[profile]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_profile", "/api/profiles")
            .describe("Create a new profile.")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .data()
            .build(),
        EndpointDescriptor::get("get_profile", "/api/profiles/{id}")
            .describe("Get a profile by id.")
            .path("id")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .query_as("fields_list", "fields[list]")
            .query_as("fields_profile", "fields[profile]")
            .query_as("fields_segment", "fields[segment]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_profile", "/api/profiles/{id}")
            .describe("Update a profile's attributes.")
            .path("id")
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .data()
            .build(),
        EndpointDescriptor::post("create_or_update_profile", "/api/profile-import")
            .describe(
                "Upsert a profile keyed on id or external identifiers; returns 200 on \
                 update and 201 on create.",
            )
            .query_as("additional_fields_profile", "additional-fields[profile]")
            .data()
            .build(),
        EndpointDescriptor::post("merge_profiles", "/api/profile-merge")
            .describe("Merge a source profile into a destination profile; irreversible.")
            .data()
            .build(),
        EndpointDescriptor::post("create_or_update_push_token", "/api/push-tokens")
            .describe("Create or update a push token for a profile.")
            .data()
            .build(),
        EndpointDescriptor::post(
            "subscribe_profiles",
            "/api/profile-subscription-bulk-create-jobs",
        )
        .describe("Subscribe one or more profiles to email/SMS marketing.")
        .data()
        .build(),
        EndpointDescriptor::post(
            "unsubscribe_profiles",
            "/api/profile-subscription-bulk-delete-jobs",
        )
        .describe("Unsubscribe one or more profiles from email/SMS marketing.")
        .data()
        .build(),
        EndpointDescriptor::post(
            "suppress_profiles",
            "/api/profile-suppression-bulk-create-jobs",
        )
        .describe("Manually suppress one or more profiles from receiving email.")
        .data()
        .build(),
        EndpointDescriptor::post(
            "unsuppress_profiles",
            "/api/profile-suppression-bulk-delete-jobs",
        )
        .describe("Remove manual suppressions from one or more profiles.")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_bulk_import_profiles_jobs",
            "/api/profile-bulk-import-jobs",
        )
        .describe("List recent profile bulk import jobs.")
        .query_as(
            "fields_profile_bulk_import_job",
            "fields[profile-bulk-import-job]",
        )
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .query("filter")
        .query("sort")
        .build(),
        EndpointDescriptor::post(
            "spawn_bulk_profile_import_job",
            "/api/profile-bulk-import-jobs",
        )
        .describe("Start a bulk import of up to 10,000 profiles, optionally into lists.")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{job_id}",
        )
        .describe("Poll a profile bulk import job's status.")
        .path("job_id")
        .query_as(
            "fields_profile_bulk_import_job",
            "fields[profile-bulk-import-job]",
        )
        .query_as("fields_list", "fields[list]")
        .query("include")
        .build(),
        EndpointDescriptor::get(
            "get_list_for_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{id}/lists",
        )
        .describe("Get the lists targeted by a profile bulk import job.")
        .path("id")
        .query_as("fields_list", "fields[list]")
        .build(),
        EndpointDescriptor::get(
            "get_list_ids_for_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{id}/relationships/lists",
        )
        .describe("Get the list ids targeted by a profile bulk import job.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_profiles_for_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{id}/profiles",
        )
        .describe("Get the profiles imported by a profile bulk import job.")
        .path("id")
        .query_as("additional_fields_profile", "additional-fields[profile]")
        .query_as("fields_profile", "fields[profile]")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .build(),
        EndpointDescriptor::get(
            "get_profile_ids_for_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{id}/relationships/profiles",
        )
        .describe("Get the profile ids imported by a profile bulk import job.")
        .path("id")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .build(),
        EndpointDescriptor::get(
            "get_errors_for_bulk_import_profiles_job",
            "/api/profile-bulk-import-jobs/{id}/import-errors",
        )
        .describe("Get the row-level errors produced by a profile bulk import job.")
        .path("id")
        .query_as("fields_import_error", "fields[import-error]")
        .query_as("page_cursor", "page[cursor]")
        .query_as("page_size", "page[size]")
        .build(),
        EndpointDescriptor::get("get_lists_for_profile", "/api/profiles/{id}/lists")
            .describe("List the lists a profile belongs to.")
            .path("id")
            .query_as("fields_list", "fields[list]")
            .build(),
        EndpointDescriptor::get(
            "get_list_ids_for_profile",
            "/api/profiles/{id}/relationships/lists",
        )
        .describe("List the ids of lists a profile belongs to.")
        .path("id")
        .build(),
        EndpointDescriptor::get("get_segments_for_profile", "/api/profiles/{id}/segments")
            .describe("List the segments a profile is a member of.")
            .path("id")
            .query_as("fields_segment", "fields[segment]")
            .build(),
        EndpointDescriptor::get(
            "get_segment_ids_for_profile",
            "/api/profiles/{id}/relationships/segments",
        )
        .describe("List the ids of segments a profile is a member of.")
        .path("id")
        .build(),
    ]
}
