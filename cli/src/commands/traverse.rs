//! The `traverse` command - build a container and walk its views.

use vistas::{Container, Element, ElementKind, Listing, OrderKind};

use crate::cli::TraverseArgs;
use crate::common::input::{parse_elements, parse_value, read_input};
use crate::common::{CliError, CliResult};

/// Run the traverse command.
pub fn run(args: TraverseArgs) -> CliResult<()> {
    let input = read_input(&args.elements)?;
    let lines = match ElementKind::from(args.element_type) {
        ElementKind::Int => traverse::<i64>(&input, &args)?,
        ElementKind::Float => traverse::<f64>(&input, &args)?,
        ElementKind::Text => traverse::<String>(&input, &args)?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Build the container, apply removals, and render each requested order.
///
/// With no explicit `--order`, every order is printed with its name.
pub fn traverse<T: Element>(input: &str, args: &TraverseArgs) -> CliResult<Vec<String>> {
    let mut container: Container<T> = parse_elements::<T>(input)?.into_iter().collect();
    tracing::debug!(kind = %T::KIND, len = container.len(), "container built");

    for value in &args.remove {
        let parsed = parse_value::<T>(value)?;
        container
            .remove_all(&parsed)
            .map_err(|source| CliError::Remove {
                value: value.clone(),
                source,
            })?;
    }

    if args.order.is_empty() {
        return OrderKind::ALL
            .into_iter()
            .map(|kind| -> CliResult<String> {
                Ok(format!("{kind}: {}", Listing(&walk(&container, kind)?)))
            })
            .collect();
    }
    args.order
        .iter()
        .map(|&kind| -> CliResult<String> { Ok(Listing(&walk(&container, kind)?).to_string()) })
        .collect()
}

/// Collect a begin/end pair of `kind` by stepping the cursor.
fn walk<T: Element>(container: &Container<T>, kind: OrderKind) -> CliResult<Vec<T>> {
    let mut it = container.begin(kind);
    let end = container.end(kind);
    let mut out = Vec::with_capacity(it.len());
    while it.not_equals(&end)? {
        out.push(it.current()?.clone());
        it.advance()?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ElementType;

    fn args(order: Vec<OrderKind>, remove: &[&str]) -> TraverseArgs {
        TraverseArgs {
            elements: String::new(),
            element_type: ElementType::Int,
            order,
            remove: remove.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn traverse_selected_orders() {
        let lines = traverse::<i64>(
            "3, 1, 2",
            &args(vec![OrderKind::Ascending, OrderKind::Reverse], &[]),
        )
        .unwrap();
        assert_eq!(lines, vec!["[1, 2, 3]", "[2, 1, 3]"]);
    }

    #[test]
    fn traverse_all_orders_are_labelled() {
        let lines = traverse::<i64>("1, 2, 3, 4, 6, 7", &args(vec![], &[])).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "order: [1, 2, 3, 4, 6, 7]");
        assert_eq!(lines[4], "side-cross: [1, 7, 2, 6, 3, 4]");
        assert_eq!(lines[5], "middle-out: [3, 4, 2, 6, 1, 7]");
    }

    #[test]
    fn traverse_applies_removals_in_order() {
        let lines = traverse::<i64>("5, 9, 5, 1", &args(vec![OrderKind::Order], &["5"])).unwrap();
        assert_eq!(lines, vec!["[9, 1]"]);
    }

    #[test]
    fn traverse_missing_removal_is_an_error() {
        let err = traverse::<i64>("1, 2", &args(vec![], &["3"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::Remove {
                source: vistas::Error::ElementNotFound { .. },
                ..
            }
        ));
    }

    #[test]
    fn traverse_removes_empty_text() {
        let lines = traverse::<String>("a,,b", &args(vec![OrderKind::Order], &[""])).unwrap();
        assert_eq!(lines, vec!["[a, b]"]);
    }

    #[test]
    fn traverse_renders_like_the_container() {
        let container: Container<f64> = [2.5, 3.0].into_iter().collect();
        let lines = traverse::<f64>("2.5, 3", &args(vec![OrderKind::Order], &[])).unwrap();
        assert_eq!(lines, vec![container.render()]);
    }

    #[test]
    fn traverse_empty_renders_brackets() {
        let lines = traverse::<f64>("", &args(vec![OrderKind::MiddleOut], &[])).unwrap();
        assert_eq!(lines, vec!["[]"]);
    }
}
