fn main() {
    renum::cli::main()
}
