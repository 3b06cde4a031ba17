use catena::ast::{Node, Program};
use catena::Type;

fn parse(source: &str) -> Program {
    catena::parse(source, "<test>").unwrap()
}

#[test]
fn shapes() {
    let program = parse(include_str!("testfiles/geometry/shapes.cat"));

    let names: Vec<&str> = program
        .functions
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["square.area", "rect.area", "cube.volume"]);

    let rect = &program.functions[1];
    assert_eq!(rect.args.len(), 2);
    assert_eq!(rect.args[0].name, "width");
    assert_eq!(rect.args[0].typ, Type::prim("int"));
    assert_eq!(rect.ret_types, [Type::prim("int")]);
}

#[test]
fn qualified_calls_stay_one_identifier() {
    let program = parse(include_str!("testfiles/geometry/circles.cat"));

    let unit = &program.functions[1];
    assert_eq!(unit.name, "unit.circle.area");

    let Node::Exp { items, .. } = &unit.body[0] else {
        panic!("body is not an expression");
    };
    assert_eq!(items.len(), 2);
    let Node::Verb { name, .. } = &items[1] else {
        panic!("expected a verb");
    };
    assert_eq!(name, "geometry:circle.area");
}

#[test]
fn union_types_come_out_canonical() {
    let program = parse(include_str!("testfiles/colors/colors.cat"));

    let red = &program.functions[0];
    let expected = Type::union(vec![Type::prim("int"), Type::prim("float")]).unwrap();
    assert_eq!(red.ret_types, [expected]);
    assert_eq!(red.ret_types[0].to_string(), "{float int}");
}
