//! HTTP API for dynamic DNS updates.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the service is operational.
//!
//! ## `/` (GET or POST)
//!
//!   Upserts one record. All parameters travel in the query string:
//!
//!   | parameter    | required | default | meaning                               |
//!   |--------------|----------|---------|---------------------------------------|
//!   | `subdomain`  | yes      |         | label prepended to the domain suffix  |
//!   | `password`   | yes      |         | checked against the stored digest     |
//!   | `newVal`     | yes      |         | the record's value                    |
//!   | `recordType` | no       | `A`     | DNS record type                       |
//!   | `ttl`        | no       | `300`   | seconds                               |
//!   | `okRespBody` | no       |         | literal body returned on success      |
//!
//!   E.g. with `DOMAIN_NAME=example.com`:
//!
//!   ```bash
//!   ❯ curl 'http://localhost:3000/?subdomain=home&password=XXXX&newVal=1.2.3.4'
//!   {"message":"DNS record for home.example.com upserted: {\"Name\":\"home.example.com\",\"Type\":\"A\",\"TTL\":300,\"ResourceRecords\":[{\"Value\":\"1.2.3.4\"}]}"}
//!   ```
//!
//!   On success returns HTTP 200 with either `okRespBody` as `text/plain`, or the JSON message
//!   above as `application/json`. Failures are always JSON:
//!
//!   * 400 `{"message": ...}` when a required parameter is missing or a parameter is malformed.
//!   * 403 `{"message": "Invalid password."}` when the password is wrong.
//!   * 500 `{"message": "Internal server error", "error": ...}` when the secret store or DNS
//!     provider fails.

mod api_error;
mod model;
pub mod routes;
pub mod server;

pub use routes::new as router;
pub use server::new;
