//! Cross-runtime interoperability tests for Rust.
//!
//! The golden payloads below were produced by the device-side Python
//! tooling for the same field values and byte order.

use payload_codec::{Builder, ByteOrder, Error, Parser};

use crate::interop::*;

const STATUS_LITTLE: &str =
    "0201805101000000ac416666666666660a40fbd4fe90eefeff0170756d702d37000300aabbcc";
const STATUS_BIG: &str =
    "01020001518041ac0000400a666666666666fbfed4fffeee900170756d702d37000003aabbcc";
const EDGE_LITTLE: &str = "ffffffffffffff800080000000807fff7fffffff7f00004772c3bcc39f6500";
const EDGE_BIG: &str = "ffffffffffffff808000800000007f7fff7fffffff00004772c3bcc39f6500";

fn test_status_frame() -> StatusFrame {
    StatusFrame {
        device_id: 0x0102,
        uptime_secs: 86400,
        temperature: 21.5,
        voltage: 3.3,
        rssi_offset: -5,
        trim: -300,
        drift: -70000,
        online: true,
        name: "pump-7".to_string(),
        payload: vec![0xaa, 0xbb, 0xcc],
    }
}

fn test_edge_cases() -> EdgeCases {
    EdgeCases {
        max_u8: u8::MAX,
        max_u16: u16::MAX,
        max_u32: u32::MAX,
        min_i8: i8::MIN,
        min_i16: i16::MIN,
        min_i32: i32::MIN,
        max_i8: i8::MAX,
        max_i16: i16::MAX,
        max_i32: i32::MAX,
        flag: false,
        empty: String::new(),
        unicode: "Grüße".to_string(),
    }
}

fn encode<T: payload_codec::Encode>(value: &T, order: ByteOrder) -> Vec<u8> {
    let mut builder = Builder::with_order(order);
    builder.put(value).unwrap();
    builder.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_frame_matches_golden() {
        let msg = test_status_frame();
        assert_eq!(hex::encode(encode(&msg, ByteOrder::Little)), STATUS_LITTLE);
        assert_eq!(hex::encode(encode(&msg, ByteOrder::Big)), STATUS_BIG);
    }

    #[test]
    fn test_status_frame_decodes_golden() {
        for (golden, order) in [(STATUS_LITTLE, ByteOrder::Little), (STATUS_BIG, ByteOrder::Big)] {
            let data = hex::decode(golden).unwrap();
            let mut parser = Parser::with_order(&data, order);
            let decoded: StatusFrame = parser.get().unwrap();
            assert_eq!(decoded, test_status_frame());
            assert!(parser.is_exhausted());
        }
    }

    #[test]
    fn test_edge_cases_match_golden() {
        let msg = test_edge_cases();
        assert_eq!(hex::encode(encode(&msg, ByteOrder::Little)), EDGE_LITTLE);
        assert_eq!(hex::encode(encode(&msg, ByteOrder::Big)), EDGE_BIG);
    }

    #[test]
    fn test_edge_cases_decode_golden() {
        for (golden, order) in [(EDGE_LITTLE, ByteOrder::Little), (EDGE_BIG, ByteOrder::Big)] {
            let data = hex::decode(golden).unwrap();
            let decoded: EdgeCases = payload_codec::from_bytes(&data, order).unwrap();
            assert_eq!(decoded, test_edge_cases());
        }
    }

    #[test]
    fn test_wrong_byte_order_decodes_differently() {
        let data = hex::decode(STATUS_LITTLE).unwrap();
        let mut parser = Parser::with_order(&data, ByteOrder::Big);
        assert_eq!(parser.read_u16().unwrap(), 0x0201);
    }

    #[test]
    fn test_truncated_frame_fails_cleanly() {
        let data = hex::decode(STATUS_LITTLE).unwrap();
        let truncated = &data[..data.len() - 1];
        let mut parser = Parser::new(truncated);
        let err = parser.get::<StatusFrame>().unwrap_err();
        assert_eq!(err, Error::out_of_bounds(3, 2));

        // Every field before the blob was consumed; the blob read was not
        let name_end = data.len() - 3 - 2;
        assert_eq!(parser.position(), name_end + 2);
        assert_eq!(parser.read_tail(), &[0xaa, 0xbb]);
    }

    #[test]
    fn test_oversized_blob_rejected_by_builder() {
        let mut msg = test_status_frame();
        msg.payload = vec![0; 70_000];
        let mut builder = Builder::new();
        let err = builder.put(&msg).unwrap_err();
        assert_eq!(err, Error::value_out_of_range(70_000, "u16"));
    }

    #[test]
    fn test_string_framing() {
        let mut builder = Builder::new();
        builder.write_str("hi").unwrap();
        assert_eq!(hex::encode(builder.as_bytes()), "686900");
    }

    #[test]
    fn test_u32_byte_order_vectors() {
        let cases = vec![(ByteOrder::Little, "04030201"), (ByteOrder::Big, "01020304")];

        for (order, expected) in cases {
            let mut builder = Builder::with_order(order);
            builder.write_u32(0x01020304).unwrap();
            assert_eq!(hex::encode(builder.as_bytes()), expected, "u32 in {} order", order);
        }
    }

    #[test]
    fn test_link_config_byte_order_from_json() {
        let config: LinkConfig = serde_json::from_str(
            r#"{"port": "/dev/ttyUSB0", "baud_rate": 115200, "byte_order": "big"}"#,
        )
        .unwrap();
        assert_eq!(config.byte_order, ByteOrder::Big);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""byte_order":"big""#));

        let bad = serde_json::from_str::<LinkConfig>(
            r#"{"port": "/dev/ttyUSB0", "baud_rate": 115200, "byte_order": "middle"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_link_config_accepts_byte_order_aliases() {
        for (name, expected) in [("LE", ByteOrder::Little), ("network", ByteOrder::Big)] {
            let json = format!(
                r#"{{"port": "/dev/ttyACM0", "baud_rate": 9600, "byte_order": "{}"}}"#,
                name
            );
            let config: LinkConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config.byte_order, expected);
            assert_eq!(config.byte_order, name.parse::<ByteOrder>().unwrap());
        }
    }
}
