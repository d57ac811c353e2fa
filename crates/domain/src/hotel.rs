//! Hotel listing records — the persisted schema, the create payload with its
//! legacy truthiness validation, and the shallow-merge patch type.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::HotelId;
use crate::slug::slugify;

/// Placeholder room photo assigned to the single room created alongside a
/// new hotel record.
pub const ROOM_IMAGE_PLACEHOLDER: &str = "https://example.com/hotel2/room2.jpg";

/// Contact details of the listing's host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInformation {
    pub name: String,
    pub contact: String,
}

/// A room attached to a hotel record.
///
/// `hotel_slug` is a denormalized copy of the parent slug taken at creation
/// time. It is NOT kept in sync if the hotel is later renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub hotel_slug: String,
    pub room_image: String,
    pub bedroom_count: u32,
}

/// A persisted hotel listing.
///
/// The full ordered sequence of these records forms the hotel document — the
/// unit of persistence (whole-document read, whole-document write).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub hotel_id: HotelId,
    pub slug: String,
    pub title: String,
    pub images: Vec<String>,
    pub description: String,
    pub guest_count: u32,
    pub bedroom_count: u32,
    pub bathroom_count: u32,
    pub amenities: Vec<String>,
    pub host_information: HostInformation,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rooms: Vec<RoomRecord>,
}

/// Create payload for a hotel listing.
///
/// Every field is optional at the wire level; [`NewHotel::into_record`]
/// applies the legacy truthiness check: a field that is absent, an empty
/// string, or numerically zero is rejected as missing. Empty arrays and empty
/// objects pass. This knowingly rejects legitimate zero values (a hotel at
/// latitude 0, a listing with `bedroom_count: 0`).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NewHotel {
    pub hotel_id: Option<HotelId>,
    pub title: Option<String>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub guest_count: Option<u32>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub host_information: Option<HostInformation>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewHotel {
    /// Validate the payload and build the record to persist.
    ///
    /// Computes `slug = slugify(title)` and attaches a single
    /// [`RoomRecord`] carrying that slug, the placeholder room image, and the
    /// payload's `bedroom_count`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when any required field is
    /// absent or falsy.
    #[allow(clippy::float_cmp)]
    pub fn into_record(self) -> Result<HotelRecord, ValidationError> {
        let missing = ValidationError::MissingFields;

        let hotel_id = self.hotel_id.filter(HotelId::is_truthy).ok_or(missing)?;
        let title = self.title.filter(|v| !v.is_empty()).ok_or(missing)?;
        let images = self.images.ok_or(missing)?;
        let description = self.description.filter(|v| !v.is_empty()).ok_or(missing)?;
        let guest_count = self.guest_count.filter(|&v| v != 0).ok_or(missing)?;
        let bedroom_count = self.bedroom_count.filter(|&v| v != 0).ok_or(missing)?;
        let bathroom_count = self.bathroom_count.filter(|&v| v != 0).ok_or(missing)?;
        let amenities = self.amenities.ok_or(missing)?;
        let host_information = self.host_information.ok_or(missing)?;
        let address = self.address.filter(|v| !v.is_empty()).ok_or(missing)?;
        let latitude = self.latitude.filter(|&v| v != 0.0).ok_or(missing)?;
        let longitude = self.longitude.filter(|&v| v != 0.0).ok_or(missing)?;

        let slug = slugify(&title);

        Ok(HotelRecord {
            hotel_id,
            slug: slug.clone(),
            title,
            images,
            description,
            guest_count,
            bedroom_count,
            bathroom_count,
            amenities,
            host_information,
            address,
            latitude,
            longitude,
            rooms: vec![RoomRecord {
                hotel_slug: slug,
                room_image: ROOM_IMAGE_PLACEHOLDER.to_string(),
                bedroom_count,
            }],
        })
    }
}

/// Partial update for a hotel record, applied as a shallow merge.
///
/// Each supplied field overwrites the corresponding record field wholesale —
/// `host_information` and `rooms` are replaced, never deep-merged. Fields not
/// supplied are left untouched, which is why `slug` survives a title change.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HotelPatch {
    pub hotel_id: Option<HotelId>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub guest_count: Option<u32>,
    pub bedroom_count: Option<u32>,
    pub bathroom_count: Option<u32>,
    pub amenities: Option<Vec<String>>,
    pub host_information: Option<HostInformation>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rooms: Option<Vec<RoomRecord>>,
}

impl HotelPatch {
    /// Merge the supplied fields onto `record`.
    pub fn apply(self, record: &mut HotelRecord) {
        if let Some(hotel_id) = self.hotel_id {
            record.hotel_id = hotel_id;
        }
        if let Some(slug) = self.slug {
            record.slug = slug;
        }
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(images) = self.images {
            record.images = images;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(guest_count) = self.guest_count {
            record.guest_count = guest_count;
        }
        if let Some(bedroom_count) = self.bedroom_count {
            record.bedroom_count = bedroom_count;
        }
        if let Some(bathroom_count) = self.bathroom_count {
            record.bathroom_count = bathroom_count;
        }
        if let Some(amenities) = self.amenities {
            record.amenities = amenities;
        }
        if let Some(host_information) = self.host_information {
            record.host_information = host_information;
        }
        if let Some(address) = self.address {
            record.address = address;
        }
        if let Some(latitude) = self.latitude {
            record.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            record.longitude = longitude;
        }
        if let Some(rooms) = self.rooms {
            record.rooms = rooms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> NewHotel {
        NewHotel {
            hotel_id: Some(HotelId::from("2")),
            title: Some("New Hotel".to_string()),
            images: Some(vec!["https://example.com/image.jpg".to_string()]),
            description: Some("A nice hotel".to_string()),
            guest_count: Some(2),
            bedroom_count: Some(1),
            bathroom_count: Some(1),
            amenities: Some(vec!["WiFi".to_string(), "Parking".to_string()]),
            host_information: Some(HostInformation {
                name: "John Doe".to_string(),
                contact: "123456789".to_string(),
            }),
            address: Some("123 Hotel St".to_string()),
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
        }
    }

    #[test]
    fn should_build_record_with_slug_and_single_room() {
        let record = full_payload().into_record().unwrap();

        assert_eq!(record.slug, "New-Hotel");
        assert_eq!(record.rooms.len(), 1);
        assert_eq!(record.rooms[0].hotel_slug, "New-Hotel");
        assert_eq!(record.rooms[0].room_image, ROOM_IMAGE_PLACEHOLDER);
        assert_eq!(record.rooms[0].bedroom_count, 1);
    }

    #[test]
    fn should_reject_each_required_field_when_absent() {
        let blank_one: [fn(&mut NewHotel); 12] = [
            |p: &mut NewHotel| p.hotel_id = None,
            |p: &mut NewHotel| p.title = None,
            |p: &mut NewHotel| p.images = None,
            |p: &mut NewHotel| p.description = None,
            |p: &mut NewHotel| p.guest_count = None,
            |p: &mut NewHotel| p.bedroom_count = None,
            |p: &mut NewHotel| p.bathroom_count = None,
            |p: &mut NewHotel| p.amenities = None,
            |p: &mut NewHotel| p.host_information = None,
            |p: &mut NewHotel| p.address = None,
            |p: &mut NewHotel| p.latitude = None,
            |p: &mut NewHotel| p.longitude = None,
        ];

        for blank in blank_one {
            let mut payload = full_payload();
            blank(&mut payload);
            assert_eq!(
                payload.into_record().unwrap_err(),
                ValidationError::MissingFields
            );
        }
    }

    #[test]
    fn should_reject_empty_strings_and_zero_values_as_missing() {
        let mut payload = full_payload();
        payload.title = Some(String::new());
        assert!(payload.into_record().is_err());

        // Legitimate zeroes fall under the legacy truthiness check.
        let mut payload = full_payload();
        payload.bedroom_count = Some(0);
        assert!(payload.into_record().is_err());

        let mut payload = full_payload();
        payload.latitude = Some(0.0);
        assert!(payload.into_record().is_err());
    }

    #[test]
    fn should_accept_empty_image_and_amenity_lists() {
        let mut payload = full_payload();
        payload.images = Some(Vec::new());
        payload.amenities = Some(Vec::new());

        let record = payload.into_record().unwrap();
        assert!(record.images.is_empty());
        assert!(record.amenities.is_empty());
    }

    #[test]
    fn should_merge_only_supplied_fields() {
        let mut record = full_payload().into_record().unwrap();
        let before = record.clone();

        HotelPatch {
            title: Some("Renamed Hotel".to_string()),
            ..HotelPatch::default()
        }
        .apply(&mut record);

        assert_eq!(record.title, "Renamed Hotel");
        // The slug is not recomputed on rename.
        assert_eq!(record.slug, before.slug);
        assert_eq!(record.description, before.description);
        assert_eq!(record.host_information, before.host_information);
        assert_eq!(record.rooms, before.rooms);
    }

    #[test]
    fn should_replace_host_information_wholesale() {
        let mut record = full_payload().into_record().unwrap();

        HotelPatch {
            host_information: Some(HostInformation {
                name: "Jane Doe".to_string(),
                contact: String::new(),
            }),
            ..HotelPatch::default()
        }
        .apply(&mut record);

        assert_eq!(record.host_information.name, "Jane Doe");
        // No deep merge: the old contact is gone.
        assert_eq!(record.host_information.contact, "");
    }

    #[test]
    fn should_roundtrip_record_through_serde_json() {
        let record = full_payload().into_record().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: HotelRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn should_deserialize_payload_with_numeric_id() {
        let payload: NewHotel = serde_json::from_str(
            r#"{"hotel_id": 7, "title": "Numbered", "guest_count": 2}"#,
        )
        .unwrap();
        assert_eq!(payload.hotel_id, Some(HotelId::from(7)));
        assert_eq!(payload.guest_count, Some(2));
    }
}
