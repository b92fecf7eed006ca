use neuromat::{display_rounded, parse_matrix, Workspace};

fn main() {
    // Size 3 with auto-fill on: W and V are uniformly 1/3 rounded to 0.333.
    let mut workspace = Workspace::new();
    workspace.set_size(3);

    let vector = parse_matrix("1\n2\n3", 3, 1).expect("vector literal is well-formed");
    workspace.set_vector(vector);

    println!(
        "size = {}, auto-fill cell value = {}",
        workspace.size,
        display_rounded(workspace.weight_fill())
    );
    print_stage("NET1", &workspace.net1);
    print_stage("OUT1", &workspace.out1);
    print_stage("NET2", &workspace.net2);
    print_stage("OUT2", &workspace.out2);
}

fn print_stage(name: &str, values: &[f64]) {
    let cells: Vec<String> = values.iter().map(|&v| display_rounded(v)).collect();
    println!("{name}: [{}]", cells.join(", "));
}
