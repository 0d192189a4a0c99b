//! The `expr!` macro for the truth-tables crate

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::parse::{Parse, ParseStream, Result};
use syn::{parenthesized, parse_macro_input, token, Ident, LitBool, LitInt, LitStr, Token};

/// Binary connectives, loosest first
#[derive(Clone, Copy)]
enum Connective {
    Or,
    And,
}

impl Connective {
    fn tighter(self) -> Option<Connective> {
        match self {
            Connective::Or => Some(Connective::And),
            Connective::And => None,
        }
    }

    fn at(self, input: ParseStream) -> bool {
        match self {
            Connective::Or => input.peek(Token![|]) && !input.peek(Token![||]),
            Connective::And => input.peek(Token![&]) && !input.peek(Token![&&]),
        }
    }

    fn eat(self, input: ParseStream) -> Result<()> {
        match self {
            Connective::Or => input.parse::<Token![|]>().map(drop),
            Connective::And => input.parse::<Token![&]>().map(drop),
        }
    }

    fn method(self) -> Ident {
        let name = match self {
            Connective::Or => "or",
            Connective::And => "and",
        };
        Ident::new(name, proc_macro2::Span::call_site())
    }
}

/// Parsed macro input
enum Node {
    /// An `Expr` binding from the caller's scope
    Binding(Ident),
    /// A variable named by a string literal
    Named(LitStr),
    Constant(bool),
    Negation(Box<Node>),
    Chain(Connective, Box<Node>, Box<Node>),
}

impl Parse for Node {
    fn parse(input: ParseStream) -> Result<Self> {
        chain(input, Connective::Or)
    }
}

/// Left-associative chain of `connective`, with tighter operators nested inside
fn chain(input: ParseStream, connective: Connective) -> Result<Node> {
    let mut node = operand(input, connective)?;
    while connective.at(input) {
        connective.eat(input)?;
        let right = operand(input, connective)?;
        node = Node::Chain(connective, Box::new(node), Box::new(right));
    }
    Ok(node)
}

fn operand(input: ParseStream, connective: Connective) -> Result<Node> {
    match connective.tighter() {
        Some(tighter) => chain(input, tighter),
        None => prefix(input),
    }
}

fn prefix(input: ParseStream) -> Result<Node> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        return Ok(Node::Negation(Box::new(prefix(input)?)));
    }

    if input.peek(token::Paren) {
        let inner;
        parenthesized!(inner in input);
        let node = inner.parse()?;
        if !inner.is_empty() {
            return Err(inner.error("unexpected tokens inside parentheses"));
        }
        return Ok(node);
    }

    let lookahead = input.lookahead1();
    if lookahead.peek(LitStr) {
        Ok(Node::Named(input.parse()?))
    } else if lookahead.peek(LitBool) {
        Ok(Node::Constant(input.parse::<LitBool>()?.value))
    } else if lookahead.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        Err(syn::Error::new(
            lit.span(),
            "use `true` or `false` for boolean literals",
        ))
    } else if lookahead.peek(Ident) {
        Ok(Node::Binding(input.parse()?))
    } else {
        Err(lookahead.error())
    }
}

impl ToTokens for Node {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let expanded = match self {
            Node::Binding(ident) => quote! { #ident },
            Node::Named(lit) => quote! { Expr::variable(#lit) },
            Node::Constant(value) => quote! { Expr::literal(#value) },
            Node::Negation(inner) => quote! { (&(#inner)).not() },
            Node::Chain(connective, left, right) => {
                let method = connective.method();
                quote! { (&(#left)).#method(&(#right)) }
            }
        };
        tokens.extend(expanded);
    }
}

/// Build an `Expr` from Rust operator syntax
///
/// `!` is negation, `&` conjunction and `|` disjunction, binding in that
/// order; parentheses group. Operands are `Expr` bindings in scope, string
/// literals naming variables, or `true`/`false`. The expansion calls
/// `Expr::variable`, `Expr::literal` and the `and`/`or`/`not` builders, so
/// `Expr` must be imported where the macro is used. Nothing is simplified.
///
/// ```ignore
/// use truth_tables::{expr, Expr};
///
/// let xor = expr!(("x" | "y") & !("x" & "y"));
///
/// let x = Expr::variable("x");
/// let always = expr!(x | !x | false);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let node = parse_macro_input!(input as Node);
    node.into_token_stream().into()
}
