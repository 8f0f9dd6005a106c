use klaviyo_client::EndpointDescriptor;

// Reporting queries are POSTs whose request body carries the statistics,
// timeframe and filter; cursor pagination rides in the query string.
fn report(operation_id: &'static str, path: &'static str, desc: &'static str) -> EndpointDescriptor {
    EndpointDescriptor::post(operation_id, path)
        .describe(desc)
        .query_as("page_cursor", "page[cursor]")
        .data()
        .build()
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        report(
            "query_campaign_values",
            "/api/campaign-values-reports",
            "Query aggregate performance values (opens, clicks, revenue) for campaigns.",
        ),
        report(
            "query_campaign_series",
            "/api/campaign-series-reports",
            "Query time-series performance data for campaigns.",
        ),
        report(
            "query_flow_values",
            "/api/flow-values-reports",
            "Query aggregate performance values for flows.",
        ),
        report(
            "query_flow_series",
            "/api/flow-series-reports",
            "Query time-series performance data for flows.",
        ),
        report(
            "query_form_values",
            "/api/form-values-reports",
            "Query aggregate performance values for forms.",
        ),
        report(
            "query_form_series",
            "/api/form-series-reports",
            "Query time-series performance data for forms.",
        ),
        report(
            "query_segment_values",
            "/api/segment-values-reports",
            "Query aggregate membership and engagement values for segments.",
        ),
        report(
            "query_segment_series",
            "/api/segment-series-reports",
            "Query time-series membership and engagement data for segments.",
        ),
    ]
}
