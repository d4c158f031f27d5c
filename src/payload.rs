//! Payload construction: turns a structured request into QR-encodable text.
//!
//! This is the data-transformation half of the pipeline. Each input mode
//! has its own trimming and formatting rule; the mapping is a single
//! exhaustive match over the request variant.

use crate::error::{Result, WorkshopError};
use crate::models::{ContactRequest, QrRequest, WifiRequest};

/// Builds the text payload for a request.
///
/// Validates required fields after trimming and fails with
/// [`WorkshopError::EmptyInput`] when one is missing; in that case no
/// payload is produced and nothing downstream runs.
pub fn encode(request: &QrRequest) -> Result<String> {
    match request {
        QrRequest::Url { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(WorkshopError::EmptyInput("Please enter a URL"));
            }
            Ok(trimmed.to_string())
        }
        QrRequest::Text { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(WorkshopError::EmptyInput("Please enter some text"));
            }
            Ok(trimmed.to_string())
        }
        QrRequest::Wifi(wifi) => encode_wifi(wifi),
        QrRequest::Contact(contact) => encode_contact(contact),
    }
}

/// Builds a Wi-Fi configuration string.
///
/// Field order is fixed: security type, ssid, password, hidden flag. The
/// ssid is trimmed, the password is used verbatim. Reserved characters
/// (`;`, `,`, `:`, `\`) are not escaped.
fn encode_wifi(wifi: &WifiRequest) -> Result<String> {
    let ssid = wifi.ssid.trim();
    if ssid.is_empty() {
        return Err(WorkshopError::EmptyInput("Please enter the network name"));
    }

    let hidden = if wifi.hidden { "true" } else { "false" };

    Ok(format!(
        "WIFI:T:{};S:{};P:{};H:{};;",
        wifi.security.wire_value(),
        ssid,
        wifi.password,
        hidden
    ))
}

/// Builds a VERSION:3.0 vCard block.
///
/// The header, version, structured-name, and formatted-name lines are always
/// present; ORG/TEL/EMAIL/URL lines appear only when their trimmed value is
/// non-empty, always in that order. The formatted-name line loses its
/// trailing space when the last name is missing.
fn encode_contact(contact: &ContactRequest) -> Result<String> {
    let first = contact.first_name.trim();
    let last = contact.last_name.trim();
    if first.is_empty() && last.is_empty() {
        return Err(WorkshopError::EmptyInput("Please enter at least a name"));
    }

    let mut vcard = format!("BEGIN:VCARD\nVERSION:3.0\nN:{last};{first};;;\nFN:{first} {last}")
        .trim_end()
        .to_string();

    let organization = contact.organization.trim();
    if !organization.is_empty() {
        vcard.push_str(&format!("\nORG:{organization}"));
    }
    let phone = contact.phone.trim();
    if !phone.is_empty() {
        vcard.push_str(&format!("\nTEL:{phone}"));
    }
    let email = contact.email.trim();
    if !email.is_empty() {
        vcard.push_str(&format!("\nEMAIL:{email}"));
    }
    let website = contact.website.trim();
    if !website.is_empty() {
        vcard.push_str(&format!("\nURL:{website}"));
    }
    vcard.push_str("\nEND:VCARD");

    Ok(vcard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WifiSecurity;

    fn wifi(ssid: &str, password: &str, security: WifiSecurity, hidden: bool) -> QrRequest {
        QrRequest::Wifi(WifiRequest {
            ssid: ssid.to_string(),
            password: password.to_string(),
            security,
            hidden,
        })
    }

    fn contact(first: &str, last: &str) -> ContactRequest {
        ContactRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..ContactRequest::default()
        }
    }

    #[test]
    fn test_url_trims_input() {
        let request = QrRequest::Url {
            text: "  https://example.com  ".to_string(),
        };
        assert_eq!(encode(&request).unwrap(), "https://example.com");
    }

    #[test]
    fn test_url_accepts_non_url_text() {
        // No scheme validation is performed
        let request = QrRequest::Url {
            text: "not a url".to_string(),
        };
        assert_eq!(encode(&request).unwrap(), "not a url");
    }

    #[test]
    fn test_text_passes_through_trimmed() {
        let request = QrRequest::Text {
            text: "\thello world\n".to_string(),
        };
        assert_eq!(encode(&request).unwrap(), "hello world");
    }

    #[test]
    fn test_empty_input_for_all_modes() {
        let requests = [
            QrRequest::Url {
                text: "   ".to_string(),
            },
            QrRequest::Text {
                text: String::new(),
            },
            wifi("  ", "secret", WifiSecurity::Wpa, false),
            QrRequest::Contact(contact("  ", "\t")),
        ];

        for request in requests {
            let result = encode(&request);
            assert!(
                matches!(result, Err(WorkshopError::EmptyInput(_))),
                "expected EmptyInput for {request:?}"
            );
        }
    }

    #[test]
    fn test_empty_input_messages_are_mode_specific() {
        let request = QrRequest::Url {
            text: String::new(),
        };
        assert_eq!(
            encode(&request).unwrap_err().to_string(),
            "Please enter a URL"
        );

        let request = wifi("", "", WifiSecurity::Wpa, false);
        assert_eq!(
            encode(&request).unwrap_err().to_string(),
            "Please enter the network name"
        );
    }

    #[test]
    fn test_wifi_exact_format() {
        let request = wifi("Home", "secret", WifiSecurity::Wpa, true);
        assert_eq!(
            encode(&request).unwrap(),
            "WIFI:T:WPA;S:Home;P:secret;H:true;;"
        );
    }

    #[test]
    fn test_wifi_hidden_flag_literal() {
        let request = wifi("Home", "secret", WifiSecurity::Wep, false);
        assert_eq!(
            encode(&request).unwrap(),
            "WIFI:T:WEP;S:Home;P:secret;H:false;;"
        );
    }

    #[test]
    fn test_wifi_open_network() {
        let request = wifi("Cafe", "", WifiSecurity::None, false);
        assert_eq!(encode(&request).unwrap(), "WIFI:T:nopass;S:Cafe;P:;H:false;;");
    }

    #[test]
    fn test_wifi_ssid_trimmed_password_verbatim() {
        let request = wifi("  Home  ", "  spaces kept  ", WifiSecurity::Wpa, false);
        assert_eq!(
            encode(&request).unwrap(),
            "WIFI:T:WPA;S:Home;P:  spaces kept  ;H:false;;"
        );
    }

    #[test]
    fn test_wifi_reserved_characters_not_escaped() {
        let request = wifi("Home;Net", "pa:ss,word\\", WifiSecurity::Wpa, false);
        assert_eq!(
            encode(&request).unwrap(),
            "WIFI:T:WPA;S:Home;Net;P:pa:ss,word\\;H:false;;"
        );
    }

    #[test]
    fn test_contact_first_name_only() {
        let payload = encode(&QrRequest::Contact(contact("Ada", ""))).unwrap();
        let lines: Vec<&str> = payload.lines().collect();

        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "N:;Ada;;;",
                "FN:Ada",
                "END:VCARD"
            ]
        );
    }

    #[test]
    fn test_contact_last_name_only() {
        let payload = encode(&QrRequest::Contact(contact("", "Lovelace"))).unwrap();
        assert!(payload.contains("N:Lovelace;;;;"));
        // Only the end of the block is trimmed; the inner space survives
        assert!(payload.contains("FN: Lovelace"));
    }

    #[test]
    fn test_contact_org_line_position() {
        let mut request = contact("Ada", "Lovelace");
        request.organization = "Analytical Engines".to_string();
        request.phone = "+44 20 7946 0001".to_string();
        request.email = "ada@example.com".to_string();
        let payload = encode(&QrRequest::Contact(request)).unwrap();

        let fn_pos = payload.find("FN:Ada Lovelace").unwrap();
        let org_pos = payload.find("ORG:Analytical Engines").unwrap();
        let tel_pos = payload.find("TEL:").unwrap();
        let email_pos = payload.find("EMAIL:").unwrap();

        assert!(fn_pos < org_pos, "ORG must come after FN");
        assert!(org_pos < tel_pos, "ORG must come before TEL");
        assert!(tel_pos < email_pos, "TEL must come before EMAIL");
    }

    #[test]
    fn test_contact_optional_lines_omitted_when_blank() {
        let mut request = contact("Ada", "");
        request.phone = "   ".to_string();
        let payload = encode(&QrRequest::Contact(request)).unwrap();

        assert!(!payload.contains("ORG:"));
        assert!(!payload.contains("TEL:"));
        assert!(!payload.contains("EMAIL:"));
        assert!(!payload.contains("URL:"));
    }

    #[test]
    fn test_contact_full_field_order() {
        let request = ContactRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone: "555-0100".to_string(),
            email: "grace@example.com".to_string(),
            organization: "Navy".to_string(),
            website: "https://example.com".to_string(),
        };
        let payload = encode(&QrRequest::Contact(request)).unwrap();

        assert_eq!(
            payload,
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             N:Hopper;Grace;;;\n\
             FN:Grace Hopper\n\
             ORG:Navy\n\
             TEL:555-0100\n\
             EMAIL:grace@example.com\n\
             URL:https://example.com\n\
             END:VCARD"
        );
    }
}
