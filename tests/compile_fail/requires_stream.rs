// A consumer requiring the composite stream capability from a type that
// does not have it: the bound failure names the missing capability instead
// of erroring deep inside generic code.

use netcaps::contract::Stream;

fn wrap_transport<T: Stream>(_transport: T) {}

fn main() {
    wrap_transport(42_u8);
}
