use crate::symbols::SymbolTable;
use crate::tokens::TokenStream;
use serde::Serialize;

/// Tokens and symbol table produced by one tokenization call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalOutput {
    pub tokens: TokenStream,
    pub symbols: SymbolTable,
}

impl LexicalOutput {
    pub fn new(tokens: TokenStream, symbols: SymbolTable) -> Self {
        Self { tokens, symbols }
    }

    /// `Token: <label>, Lexeme: <lexeme>` per token
    pub fn render_tokens(&self) -> String {
        self.tokens.render()
    }

    /// Blank line, `Symbol Table:` header, then one line per name
    pub fn render_symbol_table(&self) -> String {
        self.symbols.render()
    }

    /// Token listing followed by the symbol table
    pub fn render(&self) -> String {
        let mut out = self.render_tokens();
        out.push_str(&self.render_symbol_table());
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
