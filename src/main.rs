fn main() {
    rocket_boost::game::run();
}
