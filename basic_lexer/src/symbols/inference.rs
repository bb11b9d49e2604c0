//! Type inference over `LET` assignments
//!
//! Single left-to-right walk of the finished token stream. Every
//! `LET <identifier> = <head>` pattern yields one decision based on the
//! category of `<head>`; later assignments overwrite earlier ones.

use super::table::{InferredType, SymbolEntry, SymbolTable};
use crate::config::runtime::InferencePreferences;
use crate::logging::codes;
use crate::tokens::{Keyword, Token, TokenCategory, TokenStream};
use crate::{log_debug, log_success, log_warning};

/// Outcome of one inference pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InferenceSummary {
    /// `LET x =` patterns found
    pub assignments_examined: usize,
    /// Entries whose type was written
    pub types_assigned: usize,
    /// Patterns whose target is a function entry
    pub function_targets_skipped: usize,
}

/// Decide the type implied by the token following `=`
///
/// Returns `None` when the assignment carries no type information.
pub fn infer_from_head(head: &Token, table: &SymbolTable) -> Option<InferredType> {
    match head.category {
        TokenCategory::Number => Some(InferredType::Integer),
        TokenCategory::String => Some(InferredType::String),
        TokenCategory::Identifier => table.inferred_type(&head.lexeme),
        TokenCategory::ArithmeticOperator => Some(InferredType::Integer),
        _ => None,
    }
}

/// Refine variable types in `table` from the `LET` statements in `tokens`
pub fn infer_types(
    tokens: &TokenStream,
    table: &mut SymbolTable,
    preferences: &InferencePreferences,
) -> InferenceSummary {
    let mut summary = InferenceSummary::default();

    for (i, spanned) in tokens.iter().enumerate() {
        if !spanned.value.is_keyword(Keyword::Let) {
            continue;
        }

        let Some(target) = tokens.token_at(i + 1).and_then(Token::as_identifier) else {
            continue;
        };
        if !tokens.token_at(i + 2).is_some_and(Token::is_assignment) {
            continue;
        }
        summary.assignments_examined += 1;

        if table.get(target).is_some_and(SymbolEntry::is_function) {
            summary.function_targets_skipped += 1;
            log_warning!(code = codes::symbols::FUNCTION_ASSIGNMENT_IGNORED,
                "LET assigns to a name registered as a function; type left unchanged",
                span = spanned.span,
                "name" => target
            );
            continue;
        }

        let Some(head) = tokens.token_at(i + 3) else {
            continue;
        };

        if let Some(ty) = infer_from_head(head, table) {
            if table.set_inferred_type(target, ty) {
                summary.types_assigned += 1;
                if preferences.log_decisions {
                    log_debug!("Inferred variable type",
                        "name" => target,
                        "type" => ty,
                        "from" => head.category.label(),
                        "line" => spanned.span.start.line
                    );
                }
            }
        }
    }

    log_success!(codes::success::TYPE_INFERENCE_COMPLETE, "Type inference completed",
        "assignments" => summary.assignments_examined,
        "typed" => summary.types_assigned,
        "skipped_functions" => summary.function_targets_skipped
    );

    summary
}
