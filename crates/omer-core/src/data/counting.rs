//! Counting formulas for each of the 49 days, indexed by ordinal - 1.

/// Pointed Hebrew counting formula.
pub static HEBREW: [&str; 49] = [
    "הַיּוֹם יוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם שְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם אַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם חֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שִׁבְעָה יָמִים, שֶׁהֵם שָׁבוּעַ אֶחָד לָעֹמֶר",
    "הַיּוֹם שְׁמוֹנָה יָמִים, שֶׁהֵם שָׁבוּעַ אֶחָד וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם תִּשְׁעָה יָמִים, שֶׁהֵם שָׁבוּעַ אֶחָד וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם עֲשָׂרָה יָמִים, שֶׁהֵם שָׁבוּעַ אֶחָד וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם אַחַד עָשָׂר יוֹם, שֶׁהֵם שָׁבוּעַ אֶחָד וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁנֵים עָשָׂר יוֹם, שֶׁהֵם שָׁבוּעַ אֶחָד וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁלֹשָׁה עָשָׂר יוֹם, שֶׁהֵם שָׁבוּעַ אֶחָד וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם אַרְבָּעָה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת לָעֹמֶר",
    "הַיּוֹם חֲמִשָּׁה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם שִׁשָּׁה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם שִׁבְעָה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁמוֹנָה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם תִּשְׁעָה עָשָׂר יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים יוֹם, שֶׁהֵם שְׁנֵי שָׁבוּעוֹת וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וְאֶחָד יוֹם, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וּשְׁנֵי יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וּשְׁלֹשָׁה יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וְאַרְבָּעָה יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וַחֲמִשָּׁה יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וְשִׁשָּׁה יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם עֶשְׂרִים וְשִׁבְעָה יָמִים, שֶׁהֵם שְׁלֹשָׁה שָׁבוּעוֹת וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁמוֹנָה וְעֶשְׂרִים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת לָעֹמֶר",
    "הַיּוֹם תִּשְׁעָה וְעֶשְׂרִים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם שְׁלֹשִׁים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם אֶחָד וּשְׁלֹשִׁים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁנַיִם וּשְׁלֹשִׁים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁלֹשָׁה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם אַרְבָּעָה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם אַרְבָּעָה שָׁבוּעוֹת וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם חֲמִשָּׁה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת לָעֹמֶר",
    "הַיּוֹם שִׁשָּׁה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם שִׁבְעָה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁמוֹנָה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם תִּשְׁעָה וּשְׁלֹשִׁים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם אַרְבָּעִים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם אֶחָד וְאַרְבָּעִים יוֹם, שֶׁהֵם חֲמִשָּׁה שָׁבוּעוֹת וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁנַיִם וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת לָעֹמֶר",
    "הַיּוֹם שְׁלֹשָׁה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וְיוֹם אֶחָד לָעֹמֶר",
    "הַיּוֹם אַרְבָּעָה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וּשְׁנֵי יָמִים לָעֹמֶר",
    "הַיּוֹם חֲמִשָּׁה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וּשְׁלֹשָׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שִׁשָּׁה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וְאַרְבָּעָה יָמִים לָעֹמֶר",
    "הַיּוֹם שִׁבְעָה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וַחֲמִשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם שְׁמוֹנָה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁשָּׁה שָׁבוּעוֹת וְשִׁשָּׁה יָמִים לָעֹמֶר",
    "הַיּוֹם תִּשְׁעָה וְאַרְבָּעִים יוֹם, שֶׁהֵם שִׁבְעָה שָׁבוּעוֹת לָעֹמֶר",
];

/// Latin-script transliteration of the Hebrew formula.
pub static TRANSLITERATION: [&str; 49] = [
    "Hayom yom echad la'omer",
    "Hayom shnei yamim la'omer",
    "Hayom shloshah yamim la'omer",
    "Hayom arba'ah yamim la'omer",
    "Hayom chamishah yamim la'omer",
    "Hayom shishah yamim la'omer",
    "Hayom shiv'ah yamim, shehem shavu'a echad la'omer",
    "Hayom shmonah yamim, shehem shavu'a echad v'yom echad la'omer",
    "Hayom tish'ah yamim, shehem shavu'a echad ushnei yamim la'omer",
    "Hayom asarah yamim, shehem shavu'a echad ushloshah yamim la'omer",
    "Hayom achad asar yom, shehem shavu'a echad v'arba'ah yamim la'omer",
    "Hayom shneim asar yom, shehem shavu'a echad vachamishah yamim la'omer",
    "Hayom shloshah asar yom, shehem shavu'a echad v'shishah yamim la'omer",
    "Hayom arba'ah asar yom, shehem shnei shavu'ot la'omer",
    "Hayom chamishah asar yom, shehem shnei shavu'ot v'yom echad la'omer",
    "Hayom shishah asar yom, shehem shnei shavu'ot ushnei yamim la'omer",
    "Hayom shiv'ah asar yom, shehem shnei shavu'ot ushloshah yamim la'omer",
    "Hayom shmonah asar yom, shehem shnei shavu'ot v'arba'ah yamim la'omer",
    "Hayom tish'ah asar yom, shehem shnei shavu'ot vachamishah yamim la'omer",
    "Hayom esrim yom, shehem shnei shavu'ot v'shishah yamim la'omer",
    "Hayom esrim v'echad yom, shehem shloshah shavu'ot la'omer",
    "Hayom esrim ushnei yamim, shehem shloshah shavu'ot v'yom echad la'omer",
    "Hayom esrim ushloshah yamim, shehem shloshah shavu'ot ushnei yamim la'omer",
    "Hayom esrim v'arba'ah yamim, shehem shloshah shavu'ot ushloshah yamim la'omer",
    "Hayom esrim vachamishah yamim, shehem shloshah shavu'ot v'arba'ah yamim la'omer",
    "Hayom esrim v'shishah yamim, shehem shloshah shavu'ot vachamishah yamim la'omer",
    "Hayom esrim v'shiv'ah yamim, shehem shloshah shavu'ot v'shishah yamim la'omer",
    "Hayom shmonah v'esrim yom, shehem arba'ah shavu'ot la'omer",
    "Hayom tish'ah v'esrim yom, shehem arba'ah shavu'ot v'yom echad la'omer",
    "Hayom shloshim yom, shehem arba'ah shavu'ot ushnei yamim la'omer",
    "Hayom echad ushloshim yom, shehem arba'ah shavu'ot ushloshah yamim la'omer",
    "Hayom shnayim ushloshim yom, shehem arba'ah shavu'ot v'arba'ah yamim la'omer",
    "Hayom shloshah ushloshim yom, shehem arba'ah shavu'ot vachamishah yamim la'omer",
    "Hayom arba'ah ushloshim yom, shehem arba'ah shavu'ot v'shishah yamim la'omer",
    "Hayom chamishah ushloshim yom, shehem chamishah shavu'ot la'omer",
    "Hayom shishah ushloshim yom, shehem chamishah shavu'ot v'yom echad la'omer",
    "Hayom shiv'ah ushloshim yom, shehem chamishah shavu'ot ushnei yamim la'omer",
    "Hayom shmonah ushloshim yom, shehem chamishah shavu'ot ushloshah yamim la'omer",
    "Hayom tish'ah ushloshim yom, shehem chamishah shavu'ot v'arba'ah yamim la'omer",
    "Hayom arba'im yom, shehem chamishah shavu'ot vachamishah yamim la'omer",
    "Hayom echad v'arba'im yom, shehem chamishah shavu'ot v'shishah yamim la'omer",
    "Hayom shnayim v'arba'im yom, shehem shishah shavu'ot la'omer",
    "Hayom shloshah v'arba'im yom, shehem shishah shavu'ot v'yom echad la'omer",
    "Hayom arba'ah v'arba'im yom, shehem shishah shavu'ot ushnei yamim la'omer",
    "Hayom chamishah v'arba'im yom, shehem shishah shavu'ot ushloshah yamim la'omer",
    "Hayom shishah v'arba'im yom, shehem shishah shavu'ot v'arba'ah yamim la'omer",
    "Hayom shiv'ah v'arba'im yom, shehem shishah shavu'ot vachamishah yamim la'omer",
    "Hayom shmonah v'arba'im yom, shehem shishah shavu'ot v'shishah yamim la'omer",
    "Hayom tish'ah v'arba'im yom, shehem shiv'ah shavu'ot la'omer",
];

/// English translation.
pub static ENGLISH: [&str; 49] = [
    "Today is one day of the Omer",
    "Today is two days of the Omer",
    "Today is three days of the Omer",
    "Today is four days of the Omer",
    "Today is five days of the Omer",
    "Today is six days of the Omer",
    "Today is seven days, which is one week of the Omer",
    "Today is eight days, which is one week and one day of the Omer",
    "Today is nine days, which is one week and two days of the Omer",
    "Today is ten days, which is one week and three days of the Omer",
    "Today is eleven days, which is one week and four days of the Omer",
    "Today is twelve days, which is one week and five days of the Omer",
    "Today is thirteen days, which is one week and six days of the Omer",
    "Today is fourteen days, which is two weeks of the Omer",
    "Today is fifteen days, which is two weeks and one day of the Omer",
    "Today is sixteen days, which is two weeks and two days of the Omer",
    "Today is seventeen days, which is two weeks and three days of the Omer",
    "Today is eighteen days, which is two weeks and four days of the Omer",
    "Today is nineteen days, which is two weeks and five days of the Omer",
    "Today is twenty days, which is two weeks and six days of the Omer",
    "Today is twenty-one days, which is three weeks of the Omer",
    "Today is twenty-two days, which is three weeks and one day of the Omer",
    "Today is twenty-three days, which is three weeks and two days of the Omer",
    "Today is twenty-four days, which is three weeks and three days of the Omer",
    "Today is twenty-five days, which is three weeks and four days of the Omer",
    "Today is twenty-six days, which is three weeks and five days of the Omer",
    "Today is twenty-seven days, which is three weeks and six days of the Omer",
    "Today is twenty-eight days, which is four weeks of the Omer",
    "Today is twenty-nine days, which is four weeks and one day of the Omer",
    "Today is thirty days, which is four weeks and two days of the Omer",
    "Today is thirty-one days, which is four weeks and three days of the Omer",
    "Today is thirty-two days, which is four weeks and four days of the Omer",
    "Today is thirty-three days, which is four weeks and five days of the Omer",
    "Today is thirty-four days, which is four weeks and six days of the Omer",
    "Today is thirty-five days, which is five weeks of the Omer",
    "Today is thirty-six days, which is five weeks and one day of the Omer",
    "Today is thirty-seven days, which is five weeks and two days of the Omer",
    "Today is thirty-eight days, which is five weeks and three days of the Omer",
    "Today is thirty-nine days, which is five weeks and four days of the Omer",
    "Today is forty days, which is five weeks and five days of the Omer",
    "Today is forty-one days, which is five weeks and six days of the Omer",
    "Today is forty-two days, which is six weeks of the Omer",
    "Today is forty-three days, which is six weeks and one day of the Omer",
    "Today is forty-four days, which is six weeks and two days of the Omer",
    "Today is forty-five days, which is six weeks and three days of the Omer",
    "Today is forty-six days, which is six weeks and four days of the Omer",
    "Today is forty-seven days, which is six weeks and five days of the Omer",
    "Today is forty-eight days, which is six weeks and six days of the Omer",
    "Today is forty-nine days, which is seven weeks of the Omer",
];
