//! Client for the KASI lunar calendar service (data.go.kr LrsrCldInfoService).
//!
//! Endpoints:
//! - `getSolCalInfo`: lunar → solar (`lunYear`, `lunMonth`, `lunDay`, `lunLeapmonth`)
//! - `getLunCalInfo`: solar → lunar (`solYear`, `solMonth`, `solDay`)
//!
//! Responses are requested as JSON, but the service answers in XML when
//! `_type` is ignored, and gateway-level failures (bad service key, quota)
//! always come back as a `cmmMsgHeader` XML envelope. Both formats are
//! accepted.

use std::time::Duration;

use reqwest::blocking::Client;
use saju_config::GatewayConfig;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::gateway::CalendarConversionGateway;
use crate::types::{ConversionDirection, ConversionRequest, ConversionResult};

const SOLAR_ENDPOINT: &str = "getSolCalInfo";
const LUNAR_ENDPOINT: &str = "getLunCalInfo";
const SUCCESS_CODE: &str = "00";

#[derive(Debug, Deserialize)]
struct KasiEnvelope {
    response: KasiResponse,
}

#[derive(Debug, Deserialize)]
struct KasiResponse {
    header: KasiHeader,
    #[serde(default)]
    body: Option<KasiBody>,
}

#[derive(Debug, Deserialize)]
struct KasiHeader {
    #[serde(rename = "resultCode")]
    result_code: String,
    #[serde(rename = "resultMsg", default)]
    result_msg: String,
}

/// `items` is an object holding `item`, or an empty string when nothing matched.
#[derive(Debug, Deserialize)]
struct KasiBody {
    #[serde(default)]
    items: Value,
}

/// Numeric fields arrive either as JSON numbers or as zero-padded strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Num(i64),
    Str(String),
}

impl NumOrString {
    fn as_i64(&self, field: &str) -> Result<i64, GatewayError> {
        match self {
            Self::Num(n) => Ok(*n),
            Self::Str(s) => s
                .trim()
                .parse()
                .map_err(|e| GatewayError::Parse(format!("{field} '{s}': {e}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KasiItem {
    sol_year: Option<NumOrString>,
    sol_month: Option<NumOrString>,
    sol_day: Option<NumOrString>,
    lun_year: Option<NumOrString>,
    lun_month: Option<NumOrString>,
    lun_day: Option<NumOrString>,
    lun_leapmonth: Option<String>,
    lun_secha: Option<String>,
    lun_wolgeon: Option<String>,
    lun_iljin: Option<String>,
}

fn required(value: &Option<NumOrString>, field: &str) -> Result<i64, GatewayError> {
    value
        .as_ref()
        .ok_or_else(|| GatewayError::Parse(format!("missing field {field}")))?
        .as_i64(field)
}

fn is_leap_marker(s: &str) -> bool {
    matches!(s.trim(), "윤" | "1" | "Y" | "y")
}

/// `<response>` envelope of the XML format.
#[derive(Debug, Deserialize)]
struct XmlResponse {
    header: KasiHeader,
    #[serde(default)]
    body: Option<XmlBody>,
}

#[derive(Debug, Deserialize)]
struct XmlBody {
    #[serde(default)]
    items: Option<XmlItems>,
}

#[derive(Debug, Deserialize)]
struct XmlItems {
    #[serde(default)]
    item: Vec<XmlItem>,
}

/// XML carries every field as text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct XmlItem {
    sol_year: Option<String>,
    sol_month: Option<String>,
    sol_day: Option<String>,
    lun_year: Option<String>,
    lun_month: Option<String>,
    lun_day: Option<String>,
    lun_leapmonth: Option<String>,
    lun_secha: Option<String>,
    lun_wolgeon: Option<String>,
    lun_iljin: Option<String>,
}

impl From<XmlItem> for KasiItem {
    fn from(x: XmlItem) -> Self {
        let text = |v: Option<String>| v.map(NumOrString::Str);
        Self {
            sol_year: text(x.sol_year),
            sol_month: text(x.sol_month),
            sol_day: text(x.sol_day),
            lun_year: text(x.lun_year),
            lun_month: text(x.lun_month),
            lun_day: text(x.lun_day),
            lun_leapmonth: x.lun_leapmonth,
            lun_secha: x.lun_secha,
            lun_wolgeon: x.lun_wolgeon,
            lun_iljin: x.lun_iljin,
        }
    }
}

/// `<OpenAPI_ServiceResponse>` envelope returned for gateway-level failures.
#[derive(Debug, Deserialize)]
struct XmlServiceError {
    #[serde(rename = "cmmMsgHeader")]
    header: CmmMsgHeader,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CmmMsgHeader {
    err_msg: Option<String>,
    return_auth_msg: Option<String>,
    return_reason_code: Option<String>,
}

impl From<CmmMsgHeader> for GatewayError {
    fn from(h: CmmMsgHeader) -> Self {
        GatewayError::Api {
            code: h.return_reason_code.unwrap_or_else(|| "unknown".to_string()),
            message: h
                .return_auth_msg
                .or(h.err_msg)
                .unwrap_or_else(|| "service error".to_string()),
        }
    }
}

/// Header check, first item and direction-specific fields, shared by both
/// formats.
fn interpret(
    header: KasiHeader,
    item: Option<KasiItem>,
    direction: ConversionDirection,
) -> Result<ConversionResult, GatewayError> {
    if header.result_code.trim() != SUCCESS_CODE {
        return Err(GatewayError::Api {
            code: header.result_code,
            message: header.result_msg,
        });
    }
    let item = item.ok_or(GatewayError::NoResult)?;

    let (year, month, day, leap_month) = match direction {
        ConversionDirection::LunarToSolar => (
            required(&item.sol_year, "solYear")?,
            required(&item.sol_month, "solMonth")?,
            required(&item.sol_day, "solDay")?,
            false,
        ),
        ConversionDirection::SolarToLunar => (
            required(&item.lun_year, "lunYear")?,
            required(&item.lun_month, "lunMonth")?,
            required(&item.lun_day, "lunDay")?,
            item.lun_leapmonth.as_deref().is_some_and(is_leap_marker),
        ),
    };

    let year = i32::try_from(year).map_err(|e| GatewayError::Parse(format!("year: {e}")))?;
    let month = u32::try_from(month).map_err(|e| GatewayError::Parse(format!("month: {e}")))?;
    let day = u32::try_from(day).map_err(|e| GatewayError::Parse(format!("day: {e}")))?;

    Ok(ConversionResult {
        direction,
        year,
        month,
        day,
        leap_month,
        sexagenary_year: item.lun_secha,
        sexagenary_month: item.lun_wolgeon,
        sexagenary_day: item.lun_iljin,
    })
}

fn parse_xml(body: &str, direction: ConversionDirection) -> Result<ConversionResult, GatewayError> {
    if let Ok(failure) = quick_xml::de::from_str::<XmlServiceError>(body) {
        return Err(failure.header.into());
    }
    let response: XmlResponse =
        quick_xml::de::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;
    let item = response
        .body
        .and_then(|b| b.items)
        .and_then(|items| items.item.into_iter().next())
        .map(KasiItem::from);
    interpret(response.header, item, direction)
}

fn parse_json(body: &str, direction: ConversionDirection) -> Result<ConversionResult, GatewayError> {
    let envelope: KasiEnvelope =
        serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;
    let items = envelope
        .response
        .body
        .map(|b| b.items)
        .unwrap_or(Value::Null);
    let item = match items.get("item") {
        Some(Value::Array(list)) => list.first().cloned(),
        Some(obj @ Value::Object(_)) => Some(obj.clone()),
        _ => None,
    };
    let item = item
        .map(serde_json::from_value::<KasiItem>)
        .transpose()
        .map_err(|e| GatewayError::Parse(e.to_string()))?;
    interpret(envelope.response.header, item, direction)
}

/// Interpret a service response body (JSON or XML) for a request in
/// `direction`.
pub fn parse_response(
    body: &str,
    direction: ConversionDirection,
) -> Result<ConversionResult, GatewayError> {
    if body.trim_start().starts_with('<') {
        parse_xml(body, direction)
    } else {
        parse_json(body, direction)
    }
}

/// Blocking HTTP gateway with a bounded request timeout.
pub struct KasiGateway {
    client: Client,
    base_url: String,
    service_key: String,
    timeout: Duration,
}

impl KasiGateway {
    /// `service_key` is the decoded (raw) key; it is URL-encoded on send.
    pub fn new(
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            timeout,
        })
    }

    /// Build from settings, reading the key from `config.service_key_env`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let key = config
            .service_key()
            .ok_or_else(|| GatewayError::MissingServiceKey(config.service_key_env.clone()))?;
        Self::new(
            config.base_url.clone(),
            key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Endpoint URL and query parameters, without the service key.
    pub fn request_parts(&self, request: &ConversionRequest) -> (String, Vec<(&'static str, String)>) {
        let month = format!("{:02}", request.month);
        let day = format!("{:02}", request.day);
        match request.direction {
            ConversionDirection::LunarToSolar => (
                format!("{}/{SOLAR_ENDPOINT}", self.base_url),
                vec![
                    ("lunYear", request.year.to_string()),
                    ("lunMonth", month),
                    ("lunDay", day),
                    ("lunLeapmonth", if request.leap_month { "1" } else { "0" }.to_string()),
                    ("_type", "json".to_string()),
                ],
            ),
            ConversionDirection::SolarToLunar => (
                format!("{}/{LUNAR_ENDPOINT}", self.base_url),
                vec![
                    ("solYear", request.year.to_string()),
                    ("solMonth", month),
                    ("solDay", day),
                    ("_type", "json".to_string()),
                ],
            ),
        }
    }
}

impl CalendarConversionGateway for KasiGateway {
    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, GatewayError> {
        let (url, mut params) = self.request_parts(request);
        info!(
            "calendar conversion request: {:?} {}-{:02}-{:02} (leap: {})",
            request.direction, request.year, request.month, request.day, request.leap_month
        );
        params.push(("serviceKey", self.service_key.clone()));

        let response = self.client.get(&url).query(&params).send().map_err(|e| {
            if e.is_timeout() {
                warn!("calendar conversion timed out after {:?}", self.timeout);
                GatewayError::Timeout {
                    secs: self.timeout.as_secs(),
                }
            } else {
                warn!("calendar conversion request failed: {e}");
                GatewayError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("calendar conversion returned HTTP {status}");
            return Err(GatewayError::Transport(format!("HTTP {status}")));
        }
        let body = response
            .text()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        debug!("calendar conversion response: {} bytes", body.len());

        let result = parse_response(&body, request.direction);
        match &result {
            Ok(r) => info!(
                "calendar conversion ok: {}-{:02}-{:02}",
                r.year, r.month, r.day
            ),
            Err(e) => warn!("calendar conversion failed: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUNAR_TO_SOLAR_OBJECT: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL SERVICE."},"body":{"items":{"item":{"lunDay":"25","lunIljin":"무오(戊午)","lunLeapmonth":"평","lunMonth":"11","lunSecha":"기묘(己卯)","lunWolgeon":"병자(丙子)","lunYear":1999,"solDay":"01","solJd":2451545,"solLeapyear":"윤","solMonth":"01","solWeek":"토","solYear":2000}},"numOfRows":10,"pageNo":1,"totalCount":1}}}"#;

    const SOLAR_TO_LUNAR_ARRAY: &str = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL SERVICE."},"body":{"items":{"item":[{"lunYear":2023,"lunMonth":"02","lunDay":"11","lunLeapmonth":"윤","solYear":2023,"solMonth":"04","solDay":"01"}]},"totalCount":1}}}"#;

    #[test]
    fn parses_single_item_object() {
        let r = parse_response(LUNAR_TO_SOLAR_OBJECT, ConversionDirection::LunarToSolar).unwrap();
        assert_eq!((r.year, r.month, r.day), (2000, 1, 1));
        assert!(!r.leap_month);
        assert_eq!(r.sexagenary_day.as_deref(), Some("무오(戊午)"));
        assert_eq!(
            r.solar_date().unwrap(),
            saju_time::CalendarDate::new(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn parses_item_array_and_leap_month() {
        let r = parse_response(SOLAR_TO_LUNAR_ARRAY, ConversionDirection::SolarToLunar).unwrap();
        assert_eq!((r.year, r.month, r.day), (2023, 2, 11));
        assert!(r.leap_month);
        assert!(r.solar_date().is_err());
        assert!(r.lunar_date().unwrap().leap_month);
    }

    #[test]
    fn non_success_code_is_api_error() {
        let body = r#"{"response":{"header":{"resultCode":"03","resultMsg":"NODATA_ERROR"}}}"#;
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::Api {
                code: "03".to_string(),
                message: "NODATA_ERROR".to_string()
            })
        );
    }

    #[test]
    fn empty_items_is_no_result() {
        let body = r#"{"response":{"header":{"resultCode":"00","resultMsg":"NORMAL SERVICE."},"body":{"items":"","totalCount":0}}}"#;
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::NoResult)
        );
    }

    #[test]
    fn xml_auth_failure_is_api_error() {
        let body = "<OpenAPI_ServiceResponse><cmmMsgHeader><errMsg>SERVICE ERROR</errMsg>\
                    <returnAuthMsg>SERVICE_KEY_IS_NOT_REGISTERED_ERROR</returnAuthMsg>\
                    <returnReasonCode>30</returnReasonCode></cmmMsgHeader></OpenAPI_ServiceResponse>";
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::Api {
                code: "30".to_string(),
                message: "SERVICE_KEY_IS_NOT_REGISTERED_ERROR".to_string()
            })
        );
    }

    const LUNAR_TO_SOLAR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<response><header><resultCode>00</resultCode><resultMsg>NORMAL SERVICE.</resultMsg></header>
<body><items><item><lunDay>25</lunDay><lunIljin>무오(戊午)</lunIljin><lunLeapmonth>평</lunLeapmonth>
<lunMonth>11</lunMonth><lunSecha>기묘(己卯)</lunSecha><lunWolgeon>병자(丙子)</lunWolgeon><lunYear>1999</lunYear>
<solDay>01</solDay><solJd>2451545</solJd><solLeapyear>윤</solLeapyear><solMonth>01</solMonth>
<solWeek>토</solWeek><solYear>2000</solYear></item></items>
<numOfRows>10</numOfRows><pageNo>1</pageNo><totalCount>1</totalCount></body></response>"#;

    #[test]
    fn parses_xml_success_body() {
        let r = parse_response(LUNAR_TO_SOLAR_XML, ConversionDirection::LunarToSolar).unwrap();
        assert_eq!((r.year, r.month, r.day), (2000, 1, 1));
        assert!(!r.leap_month);
        assert_eq!(r.sexagenary_year.as_deref(), Some("기묘(己卯)"));
        assert_eq!(r.sexagenary_month.as_deref(), Some("병자(丙子)"));
    }

    #[test]
    fn parses_xml_solar_to_lunar_leap_month() {
        let body = "<response><header><resultCode>00</resultCode><resultMsg>NORMAL SERVICE.</resultMsg></header>\
                    <body><items><item><lunYear>2023</lunYear><lunMonth>02</lunMonth><lunDay>11</lunDay>\
                    <lunLeapmonth>윤</lunLeapmonth><solYear>2023</solYear></item></items></body></response>";
        let r = parse_response(body, ConversionDirection::SolarToLunar).unwrap();
        assert_eq!((r.year, r.month, r.day), (2023, 2, 11));
        assert!(r.leap_month);
    }

    #[test]
    fn xml_empty_items_is_no_result() {
        let body = "<response><header><resultCode>00</resultCode><resultMsg>NORMAL SERVICE.</resultMsg></header>\
                    <body><items/><totalCount>0</totalCount></body></response>";
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::NoResult)
        );
    }

    #[test]
    fn xml_result_code_with_attribute_is_read() {
        let body = "<response><header><resultCode attr=\"x\">99</resultCode>\
                    <resultMsg>LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR</resultMsg></header></response>";
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::Api {
                code: "99".to_string(),
                message: "LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR".to_string()
            })
        );
    }

    #[test]
    fn xml_entities_are_decoded() {
        let body = "<OpenAPI_ServiceResponse><cmmMsgHeader><errMsg>SERVICE ERROR</errMsg>\
                    <returnAuthMsg>KEY &amp; QUOTA</returnAuthMsg>\
                    <returnReasonCode>22</returnReasonCode></cmmMsgHeader></OpenAPI_ServiceResponse>";
        assert_eq!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::Api {
                code: "22".to_string(),
                message: "KEY & QUOTA".to_string()
            })
        );
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        assert!(matches!(
            parse_response("<response><header>", ConversionDirection::LunarToSolar),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn garbage_is_parse_error() {
        assert!(matches!(
            parse_response("not json", ConversionDirection::LunarToSolar),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn missing_field_is_parse_error() {
        let body = r#"{"response":{"header":{"resultCode":"00"},"body":{"items":{"item":{"solYear":2000,"solMonth":"01"}}}}}"#;
        assert!(matches!(
            parse_response(body, ConversionDirection::LunarToSolar),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn request_parts_lunar_to_solar() {
        let g = KasiGateway::new("http://example.invalid/svc/", "k", Duration::from_secs(1)).unwrap();
        let req = ConversionRequest::lunar_to_solar(crate::types::LunarDate::new(1999, 11, 25, true));
        let (url, params) = g.request_parts(&req);
        assert_eq!(url, "http://example.invalid/svc/getSolCalInfo");
        assert!(params.contains(&("lunMonth", "11".to_string())));
        assert!(params.contains(&("lunDay", "25".to_string())));
        assert!(params.contains(&("lunLeapmonth", "1".to_string())));
        assert!(params.contains(&("_type", "json".to_string())));
        assert!(params.iter().all(|(k, _)| *k != "serviceKey"));
    }

    #[test]
    fn request_parts_pad_solar_fields() {
        let g = KasiGateway::new("http://example.invalid/svc", "k", Duration::from_secs(1)).unwrap();
        let date = saju_time::CalendarDate::new(2000, 1, 5).unwrap();
        let (url, params) = g.request_parts(&ConversionRequest::solar_to_lunar(date));
        assert!(url.ends_with("/getLunCalInfo"));
        assert!(params.contains(&("solMonth", "01".to_string())));
        assert!(params.contains(&("solDay", "05".to_string())));
    }

    #[test]
    fn from_config_requires_key() {
        let config = GatewayConfig {
            service_key_env: "SAJU_GATEWAY_TEST_UNSET_KEY_VAR".to_string(),
            ..GatewayConfig::default()
        };
        assert!(matches!(
            KasiGateway::from_config(&config),
            Err(GatewayError::MissingServiceKey(var)) if var == "SAJU_GATEWAY_TEST_UNSET_KEY_VAR"
        ));
    }
}
