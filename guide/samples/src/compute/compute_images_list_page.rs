// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// [START compute_images_list_page]
use google_cloud_compute_v1::client::Images;
use google_cloud_gax::paginator::Paginator;

/// Lists the public images in `image_project`, for example `debian-cloud`.
pub async fn sample(client: &Images, image_project: &str) -> anyhow::Result<()> {
    let mut pages = client
        .list()
        .set_project(image_project)
        // Limit the number of images in each page.
        .set_max_results(10_u32)
        // Skip deprecated images.
        .set_filter("deprecated.state != DEPRECATED")
        .by_page();
    let mut count = 0;
    while let Some(page) = pages.next().await.transpose()? {
        count += 1;
        println!("Page {count}:");
        for image in page.items {
            println!(" - {}", image.name.unwrap_or_default());
        }
    }
    Ok(())
}
// [END compute_images_list_page]
