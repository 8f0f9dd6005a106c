use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_metrics", "/api/metrics")
            .describe("List metrics; filterable by integration name and category.")
            .query_as("fields_flow", "fields[flow]")
            .query_as("fields_metric", "fields[metric]")
            .query("filter")
            .query("include")
            .query_as("page_cursor", "page[cursor]")
            .build(),
        EndpointDescriptor::get("get_metric", "/api/metrics/{id}")
            .describe("Get a metric by id.")
            .path("id")
            .query_as("fields_flow", "fields[flow]")
            .query_as("fields_metric", "fields[metric]")
            .query("include")
            .build(),
        EndpointDescriptor::get("get_metric_property", "/api/metric-properties/{id}")
            .describe("Get a metric property by id; additional-fields adds sample values.")
            .path("id")
            .query_as(
                "additional_fields_metric_property",
                "additional-fields[metric-property]",
            )
            .query_as("fields_metric_property", "fields[metric-property]")
            .query_as("fields_metric", "fields[metric]")
            .query("include")
            .build(),
        EndpointDescriptor::post("query_metric_aggregates", "/api/metric-aggregates")
            .describe("Run an aggregate query (count/sum/unique) over a metric's events.")
            .data()
            .build(),
        EndpointDescriptor::get(
            "get_properties_for_metric",
            "/api/metrics/{id}/metric-properties",
        )
        .describe("List the properties recorded on a metric.")
        .path("id")
        .query_as(
            "additional_fields_metric_property",
            "additional-fields[metric-property]",
        )
        .query_as("fields_metric_property", "fields[metric-property]")
        .build(),
        EndpointDescriptor::get(
            "get_property_ids_for_metric",
            "/api/metrics/{id}/relationships/metric-properties",
        )
        .describe("List the property ids recorded on a metric.")
        .path("id")
        .build(),
        EndpointDescriptor::get(
            "get_flows_triggered_by_metric",
            "/api/metrics/{id}/flow-triggers",
        )
        .describe("List the flows triggered by this metric.")
        .path("id")
        .query_as("fields_flow", "fields[flow]")
        .build(),
        EndpointDescriptor::get(
            "get_ids_for_flows_triggered_by_metric",
            "/api/metrics/{id}/relationships/flow-triggers",
        )
        .describe("List the ids of flows triggered by this metric.")
        .path("id")
        .build(),
    ]
}
