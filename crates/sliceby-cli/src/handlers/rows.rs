//! Rows command handler.

use anyhow::Result;
use sliceby_core::{SliceKey, SliceRowsRequest};

use crate::bootstrap::CliContext;
use crate::presentation::render_rows;

/// Arguments for the rows command.
pub struct RowsArgs<'a> {
    pub id: &'a str,
    pub key: &'a str,
    pub label: bool,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub json: bool,
}

/// Interpret a slice key typed on the command line.
///
/// Anything that reads as a JSON number becomes a numeric key unless
/// `force_label` is set; everything else is a text label.
pub fn parse_slice_key(raw: &str, force_label: bool) -> SliceKey {
    if force_label {
        return SliceKey::Label(raw.to_string());
    }
    raw.parse::<serde_json::Number>()
        .map_or_else(|_| SliceKey::Label(raw.to_string()), SliceKey::Number)
}

/// Execute the rows command.
pub async fn execute(ctx: &CliContext, args: RowsArgs<'_>) -> Result<()> {
    let request = SliceRowsRequest::new(parse_slice_key(args.key, args.label))
        .with_range(args.start, args.end);

    let rows = ctx.slicebys().get_rows(args.id, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_rows(&rows));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{Call, scripted_context};
    use sliceby_core::SliceByError;

    fn args<'a>(key: &'a str, label: bool) -> RowsArgs<'a> {
        RowsArgs {
            id: "sb-1",
            key,
            label,
            start: Some(0),
            end: Some(25),
            json: false,
        }
    }

    #[test]
    fn test_parse_slice_key() {
        assert_eq!(parse_slice_key("42", false), SliceKey::index(42));
        assert_eq!(parse_slice_key("-3", false), SliceKey::index(-3));
        assert_eq!(parse_slice_key("42", true), SliceKey::Label("42".to_string()));
        assert_eq!(parse_slice_key("4.2", false).to_string(), "4.2");
        assert!(parse_slice_key("4.2", false).as_number().is_some());
        assert_eq!(parse_slice_key("007", false), SliceKey::Label("007".to_string()));
        assert_eq!(parse_slice_key("cats", false), SliceKey::Label("cats".to_string()));
    }

    #[test]
    fn test_rows_builds_request() {
        let (ctx, port) = scripted_context();
        tokio_test::block_on(execute(&ctx, args("7", false))).unwrap();

        let expected = SliceRowsRequest::new(SliceKey::index(7)).with_range(Some(0), Some(25));
        assert_eq!(port.calls(), vec![Call::Rows("sb-1".to_string(), expected)]);
    }

    #[test]
    fn test_rows_label_flag() {
        let (ctx, port) = scripted_context();
        tokio_test::block_on(execute(&ctx, args("7", true))).unwrap();

        match &port.calls()[0] {
            Call::Rows(_, request) => assert_eq!(request.slice_key, SliceKey::from("7")),
            other => panic!("expected Rows, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_bad_window_is_invalid_request() {
        let (ctx, _port) = scripted_context();
        let bad = RowsArgs {
            start: Some(30),
            end: Some(2),
            ..args("a", false)
        };
        let err = tokio_test::block_on(execute(&ctx, bad)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SliceByError>(),
            Some(SliceByError::InvalidRequest { .. })
        ));
    }
}
