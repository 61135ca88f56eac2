/// Build script: generates lookup-table arms from vars/<index>.json via
/// vars-codegen and splices them into variable_data.rs.in, writing the
/// result to OUT_DIR for inclusion in lib.rs.
const INDEXES: &[&str] = &["taxon", "assembly"];

fn main() {
    let template_path = "variable_data.rs.in";
    println!("cargo:rerun-if-changed={template_path}");
    let mut source = std::fs::read_to_string(template_path).expect("Cannot read variable_data.rs.in");

    let settings = vars_codegen::Settings::default();
    for index in INDEXES {
        let schema_path = format!("vars/{index}.json");
        println!("cargo:rerun-if-changed={schema_path}");

        let schema_str = std::fs::read_to_string(&schema_path)
            .unwrap_or_else(|e| panic!("Cannot read {schema_path}: {e}"));
        let generated = vars_codegen::generate_str(&schema_str, &settings)
            .unwrap_or_else(|e| panic!("Cannot generate from {schema_path}: {e}"));
        for diagnostic in &generated.diagnostics {
            println!("cargo:warning={schema_path}: {diagnostic}");
        }

        source = vars_codegen::splice::splice(&source, index, &generated.lines)
            .unwrap_or_else(|e| panic!("Cannot splice {index}: {e}"));
    }

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = std::path::Path::new(&out_dir).join("variable_data.rs");
    std::fs::write(&dest, source).expect("Cannot write generated variable_data.rs");
}
