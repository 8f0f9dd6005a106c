use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![EndpointDescriptor::post(
        "request_profile_deletion",
        "/api/data-privacy-deletion-jobs",
    )
    .describe("Request deletion of a profile by id, email or phone number (GDPR/CCPA).")
    .data()
    .build()]
}
