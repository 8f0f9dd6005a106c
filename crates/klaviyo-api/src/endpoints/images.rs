use klaviyo_client::EndpointDescriptor;

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::get("get_images", "/api/images")
            .describe("List images in the account's image library.")
            .query_as("fields_image", "fields[image]")
            .query("filter")
            .query_as("page_cursor", "page[cursor]")
            .query_as("page_size", "page[size]")
            .query("sort")
            .build(),
        EndpointDescriptor::post("upload_image_from_url", "/api/images")
            .describe("Import an image into the library from a URL.")
            .data()
            .build(),
        EndpointDescriptor::get("get_image", "/api/images/{id}")
            .describe("Get an image by id.")
            .path("id")
            .query_as("fields_image", "fields[image]")
            .build(),
        EndpointDescriptor::patch("update_image", "/api/images/{id}")
            .describe("Rename or hide an image.")
            .path("id")
            .data()
            .build(),
        // The one endpoint outside the JSON:API envelope convention:
        // the image bytes travel as a multipart file part.
        EndpointDescriptor::post("upload_image_from_file", "/api/image-upload")
            .describe("Upload an image from a local file as multipart/form-data.")
            .multipart()
            .file_field("file")
            .field("name")
            .field("hidden")
            .build(),
    ]
}
