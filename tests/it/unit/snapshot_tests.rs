//! Snapshot tests using the insta crate.
//!
//! Captures the JSON shape of parse results and settings. To update
//! snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use userview::parse_file;
use userview::settings::Settings;

#[test]
fn snapshot_parse_outcome() {
    let outcome = parse_file([
        "id;first;last;email;gender;ip",
        "1,John,Doe,j@x.com,M,1.1.1.1",
        "2,Jane,Doe,,F,2.2.2.2",
    ]);
    insta::assert_json_snapshot!(outcome, @r#"
    {
      "records": [
        {
          "id": "1",
          "first_name": "John",
          "last_name": "Doe",
          "email": "j@x.com",
          "gender": "M",
          "ip_address": "1.1.1.1"
        }
      ],
      "errors": [
        {
          "line_number": 3,
          "error": "email must not be empty"
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "page_size": 10,
      "sort_column": "id",
      "sort_direction": "ascending",
      "log_filter": "warn",
      "log_file": null
    }
    "#);
}
