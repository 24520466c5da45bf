//! Records shown on first launch, before any data file exists.

use crate::store::RecordBook;

const SAMPLE_JSON: &str = r#"{
  "persons": [
    {
      "name": "Alex Yeoh",
      "phone": "87438807",
      "level": "Sec 3",
      "class_groups": ["Math", "Physics"],
      "assignments": [
        { "name": "hw1", "class_group": "Math", "marked": true },
        { "name": "hw2", "class_group": "Math" }
      ]
    },
    {
      "name": "Bernice Yu",
      "phone": "99272758",
      "level": "Sec 3",
      "class_groups": ["Math"],
      "assignments": [{ "name": "hw1", "class_group": "Math" }]
    },
    {
      "name": "Charlotte Oliveiro",
      "phone": "93210283",
      "level": "Sec 4",
      "class_groups": ["Chemistry"],
      "assignments": []
    },
    {
      "name": "David Li",
      "phone": "91031282",
      "level": "Sec 4",
      "class_groups": ["Chemistry", "Physics"],
      "assignments": [{ "name": "lab report", "class_group": "Chemistry" }]
    },
    {
      "name": "Irfan Ibrahim",
      "phone": "92492021",
      "level": "Sec 2",
      "class_groups": [],
      "assignments": []
    }
  ]
}"#;

pub fn sample_record_book() -> Result<RecordBook, serde_json::Error> {
    serde_json::from_str(SAMPLE_JSON)
}
