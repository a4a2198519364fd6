use bounded_stack::StackError;
use expect_test::Expect;

pub fn check(err: StackError, expected: Expect) {
    expected.assert_eq(&err.to_string());
}
