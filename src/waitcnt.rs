//! WAITCNT, the waitstate control register that seeds the timing table.

bitfield! {
    #[derive(Serialize, Deserialize, Default, Copy, Clone, PartialEq, Eq)]
    pub struct WaitControl(u16);
    impl Debug;
    u16;
    pub sram_wait_control, set_sram_wait_control: 1, 0;
    pub ws0_first_access, set_ws0_first_access: 3, 2;
    pub ws0_second_access, set_ws0_second_access: 4, 4;
    pub ws1_first_access, set_ws1_first_access: 6, 5;
    pub ws1_second_access, set_ws1_second_access: 7, 7;
    pub ws2_first_access, set_ws2_first_access: 9, 8;
    pub ws2_second_access, set_ws2_second_access: 10, 10;
    pub phi_terminal_output, set_phi_terminal_output: 12, 11;
    pub prefetch_buffer_enable, set_prefetch_buffer_enable: 14, 14;
    pub type_flag, set_type_flag: 15, 15;
}
