use klaviyo_client::EndpointDescriptor;

/// The three operations every catalog bulk-job family exposes: list
/// jobs, spawn a job, poll one job. Delete-job families carry no
/// resource sparse fieldset because the job result includes nothing.
fn job_triple(
    ops: [&'static str; 3],
    paths: [&'static str; 2],
    job_fields: [&'static str; 2],
    resource_fields: Option<[&'static str; 2]>,
    descs: [&'static str; 3],
) -> Vec<EndpointDescriptor> {
    let list = EndpointDescriptor::get(ops[0], paths[0])
        .describe(descs[0])
        .query_as(job_fields[0], job_fields[1])
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .build();
    let spawn = EndpointDescriptor::post(ops[1], paths[0])
        .describe(descs[1])
        .data()
        .build();
    let mut get = EndpointDescriptor::get(ops[2], paths[1])
        .describe(descs[2])
        .path("job_id")
        .query_as(job_fields[0], job_fields[1]);
    if let Some([arg, wire]) = resource_fields {
        get = get.query_as(arg, wire).query("include");
    }
    vec![list, spawn, get.build()]
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    let mut table = vec![
        // --- items ---
        EndpointDescriptor::get("get_catalog_items", "/api/catalog-items")
            .describe("List catalog items in the default catalog.")
            .query_as("fields_catalog_item", "fields[catalog-item]")
            .query_as("fields_catalog_variant", "fields[catalog-variant]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_catalog_item", "/api/catalog-items")
            .describe("Create a catalog item.")
            .data()
            .build(),
        EndpointDescriptor::get("get_catalog_item", "/api/catalog-items/{id}")
            .describe("Get a catalog item by id (format <integration>:::<catalog>:::<external id>).")
            .path("id")
            .query_as("fields_catalog_item", "fields[catalog-item]")
            .query_as("fields_catalog_variant", "fields[catalog-variant]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_catalog_item", "/api/catalog-items/{id}")
            .describe("Update a catalog item.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_catalog_item", "/api/catalog-items/{id}")
            .describe("Delete a catalog item.")
            .path("id")
            .build(),
        // --- variants ---
        EndpointDescriptor::get("get_catalog_variants", "/api/catalog-variants")
            .describe("List catalog variants.")
            .query_as("fields_catalog_variant", "fields[catalog-variant]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_catalog_variant", "/api/catalog-variants")
            .describe("Create a catalog variant.")
            .data()
            .build(),
        EndpointDescriptor::get("get_catalog_variant", "/api/catalog-variants/{id}")
            .describe("Get a catalog variant by id.")
            .path("id")
            .query_as("fields_catalog_variant", "fields[catalog-variant]")
            .build(),
        EndpointDescriptor::patch("update_catalog_variant", "/api/catalog-variants/{id}")
            .describe("Update a catalog variant.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_catalog_variant", "/api/catalog-variants/{id}")
            .describe("Delete a catalog variant.")
            .path("id")
            .build(),
        EndpointDescriptor::get(
            "get_variants_for_catalog_item",
            "/api/catalog-items/{id}/variants",
        )
        .describe("List the variants of a catalog item.")
        .path("id")
        .query_as("fields_catalog_variant", "fields[catalog-variant]")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        EndpointDescriptor::get(
            "get_variant_ids_for_catalog_item",
            "/api/catalog-items/{id}/relationships/variants",
        )
        .describe("List the variant ids of a catalog item.")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        // --- categories ---
        EndpointDescriptor::get("get_catalog_categories", "/api/catalog-categories")
            .describe("List catalog categories.")
            .query_as("fields_catalog_category", "fields[catalog-category]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("create_catalog_category", "/api/catalog-categories")
            .describe("Create a catalog category.")
            .data()
            .build(),
        EndpointDescriptor::get("get_catalog_category", "/api/catalog-categories/{id}")
            .describe("Get a catalog category by id.")
            .path("id")
            .query_as("fields_catalog_category", "fields[catalog-category]")
            .build(),
        EndpointDescriptor::patch("update_catalog_category", "/api/catalog-categories/{id}")
            .describe("Update a catalog category.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_catalog_category", "/api/catalog-categories/{id}")
            .describe("Delete a catalog category.")
            .path("id")
            .build(),
        EndpointDescriptor::get(
            "get_categories_for_catalog_item",
            "/api/catalog-items/{id}/categories",
        )
        .describe("List the categories a catalog item belongs to.")
        .path("id")
        .query_as("fields_catalog_category", "fields[catalog-category]")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        EndpointDescriptor::get(
            "get_items_for_catalog_category",
            "/api/catalog-categories/{id}/items",
        )
        .describe("List the items in a catalog category.")
        .path("id")
        .query_as("fields_catalog_item", "fields[catalog-item]")
        .query_as("fields_catalog_variant", "fields[catalog-variant]")
        .query("filter")
        .query("include")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        // --- item <-> category relationships ---
        EndpointDescriptor::get(
            "get_category_ids_for_catalog_item",
            "/api/catalog-items/{id}/relationships/categories",
        )
        .describe("List the category ids a catalog item belongs to.")
        .path("id")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        EndpointDescriptor::post(
            "add_categories_to_catalog_item",
            "/api/catalog-items/{id}/relationships/categories",
        )
        .describe("Attach categories to a catalog item (data is an array of category refs).")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::patch(
            "update_categories_for_catalog_item",
            "/api/catalog-items/{id}/relationships/categories",
        )
        .describe("Replace a catalog item's categories; an empty array clears them.")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::delete(
            "remove_categories_from_catalog_item",
            "/api/catalog-items/{id}/relationships/categories",
        )
        .describe("Detach categories from a catalog item (data is an array of category refs).")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::get(
            "get_item_ids_for_catalog_category",
            "/api/catalog-categories/{id}/relationships/items",
        )
        .describe("List the item ids in a catalog category.")
        .path("id")
        .query_as("page_cursor", "page[cursor]")
        .query("sort")
        .build(),
        EndpointDescriptor::post(
            "add_items_to_catalog_category",
            "/api/catalog-categories/{id}/relationships/items",
        )
        .describe("Attach items to a catalog category (data is an array of item refs).")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::patch(
            "update_items_for_catalog_category",
            "/api/catalog-categories/{id}/relationships/items",
        )
        .describe("Replace a catalog category's items; an empty array clears them.")
        .path("id")
        .data()
        .build(),
        EndpointDescriptor::delete(
            "remove_items_from_catalog_category",
            "/api/catalog-categories/{id}/relationships/items",
        )
        .describe("Detach items from a catalog category (data is an array of item refs).")
        .path("id")
        .data()
        .build(),
    ];

    // --- bulk job families ---
    table.extend(job_triple(
        [
            "get_create_items_jobs",
            "bulk_create_catalog_items",
            "get_create_items_job",
        ],
        [
            "/api/catalog-item-bulk-create-jobs",
            "/api/catalog-item-bulk-create-jobs/{job_id}",
        ],
        [
            "fields_catalog_item_bulk_create_job",
            "fields[catalog-item-bulk-create-job]",
        ],
        Some(["fields_catalog_item", "fields[catalog-item]"]),
        [
            "List recent catalog item bulk create jobs.",
            "Create catalog items in bulk (up to 100 per job).",
            "Poll a catalog item bulk create job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_update_items_jobs",
            "bulk_update_catalog_items",
            "get_update_items_job",
        ],
        [
            "/api/catalog-item-bulk-update-jobs",
            "/api/catalog-item-bulk-update-jobs/{job_id}",
        ],
        [
            "fields_catalog_item_bulk_update_job",
            "fields[catalog-item-bulk-update-job]",
        ],
        Some(["fields_catalog_item", "fields[catalog-item]"]),
        [
            "List recent catalog item bulk update jobs.",
            "Update catalog items in bulk (up to 100 per job).",
            "Poll a catalog item bulk update job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_delete_items_jobs",
            "bulk_delete_catalog_items",
            "get_delete_items_job",
        ],
        [
            "/api/catalog-item-bulk-delete-jobs",
            "/api/catalog-item-bulk-delete-jobs/{job_id}",
        ],
        [
            "fields_catalog_item_bulk_delete_job",
            "fields[catalog-item-bulk-delete-job]",
        ],
        None,
        [
            "List recent catalog item bulk delete jobs.",
            "Delete catalog items in bulk (up to 100 per job).",
            "Poll a catalog item bulk delete job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_create_variants_jobs",
            "bulk_create_catalog_variants",
            "get_create_variants_job",
        ],
        [
            "/api/catalog-variant-bulk-create-jobs",
            "/api/catalog-variant-bulk-create-jobs/{job_id}",
        ],
        [
            "fields_catalog_variant_bulk_create_job",
            "fields[catalog-variant-bulk-create-job]",
        ],
        Some(["fields_catalog_variant", "fields[catalog-variant]"]),
        [
            "List recent catalog variant bulk create jobs.",
            "Create catalog variants in bulk (up to 100 per job).",
            "Poll a catalog variant bulk create job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_update_variants_jobs",
            "bulk_update_catalog_variants",
            "get_update_variants_job",
        ],
        [
            "/api/catalog-variant-bulk-update-jobs",
            "/api/catalog-variant-bulk-update-jobs/{job_id}",
        ],
        [
            "fields_catalog_variant_bulk_update_job",
            "fields[catalog-variant-bulk-update-job]",
        ],
        Some(["fields_catalog_variant", "fields[catalog-variant]"]),
        [
            "List recent catalog variant bulk update jobs.",
            "Update catalog variants in bulk (up to 100 per job).",
            "Poll a catalog variant bulk update job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_delete_variants_jobs",
            "bulk_delete_catalog_variants",
            "get_delete_variants_job",
        ],
        [
            "/api/catalog-variant-bulk-delete-jobs",
            "/api/catalog-variant-bulk-delete-jobs/{job_id}",
        ],
        [
            "fields_catalog_variant_bulk_delete_job",
            "fields[catalog-variant-bulk-delete-job]",
        ],
        None,
        [
            "List recent catalog variant bulk delete jobs.",
            "Delete catalog variants in bulk (up to 100 per job).",
            "Poll a catalog variant bulk delete job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_create_categories_jobs",
            "bulk_create_catalog_categories",
            "get_create_categories_job",
        ],
        [
            "/api/catalog-category-bulk-create-jobs",
            "/api/catalog-category-bulk-create-jobs/{job_id}",
        ],
        [
            "fields_catalog_category_bulk_create_job",
            "fields[catalog-category-bulk-create-job]",
        ],
        Some(["fields_catalog_category", "fields[catalog-category]"]),
        [
            "List recent catalog category bulk create jobs.",
            "Create catalog categories in bulk (up to 100 per job).",
            "Poll a catalog category bulk create job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_update_categories_jobs",
            "bulk_update_catalog_categories",
            "get_update_categories_job",
        ],
        [
            "/api/catalog-category-bulk-update-jobs",
            "/api/catalog-category-bulk-update-jobs/{job_id}",
        ],
        [
            "fields_catalog_category_bulk_update_job",
            "fields[catalog-category-bulk-update-job]",
        ],
        Some(["fields_catalog_category", "fields[catalog-category]"]),
        [
            "List recent catalog category bulk update jobs.",
            "Update catalog categories in bulk (up to 100 per job).",
            "Poll a catalog category bulk update job.",
        ],
    ));
    table.extend(job_triple(
        [
            "get_delete_categories_jobs",
            "bulk_delete_catalog_categories",
            "get_delete_categories_job",
        ],
        [
            "/api/catalog-category-bulk-delete-jobs",
            "/api/catalog-category-bulk-delete-jobs/{job_id}",
        ],
        [
            "fields_catalog_category_bulk_delete_job",
            "fields[catalog-category-bulk-delete-job]",
        ],
        None,
        [
            "List recent catalog category bulk delete jobs.",
            "Delete catalog categories in bulk (up to 100 per job).",
            "Poll a catalog category bulk delete job.",
        ],
    ));

    table
}
