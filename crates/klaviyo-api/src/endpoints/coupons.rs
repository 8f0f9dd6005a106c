use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_coupons", "/api/coupons")
            .describe("List coupons.")
            .query_as("fields_coupon", "fields[coupon]")
            .query_as("page_cursor", "page[cursor]")
            .build(),
        EndpointDescriptor::post("create_coupon", "/api/coupons")
            .describe("Create a coupon.")
            .data()
            .build(),
        EndpointDescriptor::get("get_coupon", "/api/coupons/{id}")
            .describe("Get a coupon by id.")
            .path("id")
            .query_as("fields_coupon", "fields[coupon]")
            .build(),
        EndpointDescriptor::patch("update_coupon", "/api/coupons/{id}")
            .describe("Update a coupon.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_coupon", "/api/coupons/{id}")
            .describe("Delete a coupon and all of its codes.")
            .path("id")
            .build(),
        EndpointDescriptor::get("get_coupon_codes", "/api/coupon-codes")
            .describe("List coupon codes; filterable by coupon and profile.")
            .query_as("fields_coupon_code", "fields[coupon-code]")
            .query_as("fields_coupon", "fields[coupon]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .build(),
        EndpointDescriptor::post("create_coupon_code", "/api/coupon-codes")
            .describe("Create a coupon code for a coupon.")
            .data()
            .build(),
        EndpointDescriptor::get("get_coupon_code", "/api/coupon-codes/{id}")
            .describe("Get a coupon code by id.")
            .path("id")
            .query_as("fields_coupon_code", "fields[coupon-code]")
            .query_as("fields_coupon", "fields[coupon]")
            .query("include")
            .build(),
        EndpointDescriptor::patch("update_coupon_code", "/api/coupon-codes/{id}")
            .describe("Update an unassigned coupon code.")
            .path("id")
            .data()
            .build(),
        EndpointDescriptor::delete("delete_coupon_code", "/api/coupon-codes/{id}")
            .describe("Delete a coupon code.")
            .path("id")
            .build(),
        EndpointDescriptor::get(
            "get_coupon_code_bulk_create_jobs",
            "/api/coupon-code-bulk-create-jobs",
        )
        .describe("List recent coupon code bulk create jobs.")
        .query_as(
            "fields_coupon_code_bulk_create_job",
            "fields[coupon-code-bulk-create-job]",
        )
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .build(),
        EndpointDescriptor::post("bulk_create_coupon_codes", "/api/coupon-code-bulk-create-jobs")
            .describe("Create coupon codes in bulk (up to 200 per job).")
            .data()
            .build(),
        EndpointDescriptor::get(
            "get_coupon_code_bulk_create_job",
            "/api/coupon-code-bulk-create-jobs/{job_id}",
        )
        .describe("Poll a coupon code bulk create job.")
        .path("job_id")
        .query_as(
            "fields_coupon_code_bulk_create_job",
            "fields[coupon-code-bulk-create-job]",
        )
        .query_as("fields_coupon_code", "fields[coupon-code]")
        .query("include")
        .build(),
        EndpointDescriptor::get("get_coupon_for_coupon_code", "/api/coupon-codes/{id}/coupon")
            .describe("Get the parent coupon of a coupon code.")
            .path("id")
            .query_as("fields_coupon", "fields[coupon]")
            .build(),
        EndpointDescriptor::get(
            "get_coupon_id_for_coupon_code",
            "/api/coupon-codes/{id}/relationships/coupon",
        )
        .describe("Get the parent coupon id of a coupon code.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_coupon_codes_for_coupon",
            "/api/coupons/{id}/coupon-codes",
        )
        .describe("List the codes of a coupon.")
        .path("id")
        .query_as("fields_coupon_code", "fields[coupon-code]")
        .query_as("fields_coupon", "fields[coupon]")
        .query("filter")
        .query("include")
        .query_as("page_cursor", "page[cursor]")
        .build(),
        EndpointDescriptor::get(
            "get_coupon_code_ids_for_coupon",
            "/api/coupons/{id}/relationships/coupon-codes",
        )
        .describe("List the code ids of a coupon.")
        .path("id")
        .query("filter")
        .query_as("page_cursor", "page[cursor]")
        .build(),
    ]
}
