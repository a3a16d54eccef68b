//! 이름 변환 모듈
//!
//! 파일 이름을 import 식별자로 변환합니다.

/// `_` 또는 `-` 로 나눈 각 조각의 첫 글자를 대문자로 바꾸고 이어 붙입니다.
///
/// 나머지 글자는 그대로 둡니다. 결과가 유효한 식별자인지는 검사하지 않습니다.
///
/// # Examples
/// ```
/// use barrelgen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("my-component"), "MyComponent");
/// assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// 생성 코드에 쓸 수 있는 식별자로 변환
///
/// [`to_pascal_case`] 결과에서 식별자에 쓸 수 없는 문자는 `_` 로 바꾸고,
/// 숫자로 시작하거나 비어 있으면 앞에 `_` 를 붙입니다.
pub fn to_identifier(name: &str) -> String {
    let mut ident: String = to_pascal_case(name)
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect();

    if ident.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    ident
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
